//! # Sequence Handling Module
//!
//! Turns raw user-supplied nucleotide strings into validated [`Sequence`] values and expands
//! IUPAC degenerate codes into the concrete sequences they represent.
//!
//! ## Key Components
//!
//! - [`iupac`] - The fixed IUPAC nucleotide alphabet and the base set behind each code
//! - [`validator`] - Whitespace stripping, case folding and alphabet checks
//! - [`expander`] - Bounded, canonically ordered Cartesian expansion of degenerate codes
//!
//! [`Sequence`]: crate::core::models::sequence::Sequence

pub mod expander;
pub mod iupac;
pub mod validator;
