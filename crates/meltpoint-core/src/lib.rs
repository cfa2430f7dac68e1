//! # Meltpoint Core Library
//!
//! A deterministic, table-driven engine for computing the melting temperature (Tm) and a
//! recommended annealing temperature of PCR primers, based on the nearest-neighbor
//! thermodynamic model of DNA duplex stability.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture so that every numeric result can be
//! traced back to a pure function over immutable inputs.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Sequence`, `ReactionConditions`,
//!   `TmResult`), IUPAC alphabet handling and degenerate-base expansion, the nearest-neighbor
//!   parameter table, and the pure thermodynamic and salt-correction arithmetic.
//!
//! - **[`engine`]: The Logic Core.** Orchestrates validation, expansion, accumulation,
//!   correction and aggregation for a single primer (`TmEngine`), and fans that work out over
//!   a bounded worker pool with per-item failure isolation (`BatchScheduler`).
//!
//! - **[`workflows`]: The Public API.** Request-shaped entry points for single and batch
//!   calculations. Callers collect raw input into these request types; the library never
//!   parses files, HTTP bodies or command-line arguments itself.

pub mod core;
pub mod engine;
pub mod workflows;
