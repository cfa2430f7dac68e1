//! # Core Models Module
//!
//! Immutable value types flowing through the calculation pipeline.
//!
//! ## Key Components
//!
//! - [`sequence`] - Validated IUPAC sequences and concrete A/C/G/T variants
//! - [`conditions`] - Reaction conditions and the polymerase catalog
//! - [`request`] - Request shapes consumed by the public workflows
//! - [`result`] - Calculation results and degenerate aggregation policies
//!
//! ## Usage
//!
//! ```ignore
//! use meltpoint::core::models::conditions::ReactionConditions;
//! use meltpoint::core::sequence::validator;
//!
//! let sequence = validator::validate("atgc gtac gtagc")?;
//! assert_eq!(sequence.as_str(), "ATGCGTACGTAGC");
//!
//! let conditions = ReactionConditions::default();
//! conditions.validate()?;
//! ```

pub mod conditions;
pub mod request;
pub mod result;
pub mod sequence;
