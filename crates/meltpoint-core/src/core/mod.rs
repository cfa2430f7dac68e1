//! # Core Module
//!
//! This module provides the pure building blocks of the melting-temperature calculation:
//! validated sequence models, the IUPAC alphabet, degenerate-base expansion, and the
//! nearest-neighbor thermodynamics with ionic corrections.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Sequences, reaction conditions, polymerases and results
//! - **Sequence Handling** ([`sequence`]) - Normalization, alphabet validation and expansion
//!   of degenerate codes into concrete variants
//! - **Thermodynamics** ([`thermo`]) - The nearest-neighbor parameter table, ΔH/ΔS
//!   accumulation, the Tm equation and salt correction
//!
//! ## Scientific Foundation
//!
//! - **Nearest-neighbor model** with the unified SantaLucia & Hicks (2004) parameters
//! - **Two-state duplex melting** with strand-concentration and symmetry terms
//! - **Monovalent salt correction** with a fixed logarithmic coefficient, plus an
//!   independent additive term for free Mg²⁺ after dNTP chelation
//!
//! Every function in this module is side-effect free and safe to call concurrently.

pub mod models;
pub mod sequence;
pub mod thermo;
