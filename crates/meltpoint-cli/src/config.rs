//! Configuration layering for the CLI: built-in defaults, then an optional TOML file, then
//! command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
