//! # Thermodynamics Module
//!
//! Pure nearest-neighbor thermodynamics for concrete DNA duplexes.
//!
//! ## Key Components
//!
//! - [`nn_table`] - The static SantaLucia & Hicks (2004) stacking, initiation, terminal and
//!   symmetry parameters
//! - [`accumulator`] - ΔH/ΔS summation over a concrete sequence and the two-state Tm equation
//! - [`salt`] - Monovalent and divalent ion corrections applied on top of the reference Tm
//!
//! ## Units
//!
//! ΔH is in kcal/mol, ΔS in cal/(mol·K), temperatures in °C, primer concentration in µM and
//! ion concentrations in mM.

pub mod accumulator;
pub mod nn_table;
pub mod salt;

/// Gas constant in cal/(mol·K).
pub const GAS_CONSTANT: f64 = 1.987;

pub const KELVIN_OFFSET: f64 = 273.15;
