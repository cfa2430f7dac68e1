//! # Workflows Module
//!
//! High-level entry points for callers of the Meltpoint library.
//!
//! ## Overview
//!
//! Each workflow takes already-collected request data plus an [`EngineConfig`], validates the
//! configuration, runs the engine and returns typed results. File formats, HTTP bodies and
//! command-line parsing belong to the caller.
//!
//! ## Architecture
//!
//! - **Single Calculation** ([`calculate`]) - One primer under one set of reaction conditions
//! - **Batch Calculation** ([`batch`]) - Many labeled primers on a bounded worker pool, with
//!   per-item failure isolation, progress reporting and cooperative cancellation
//!
//! [`EngineConfig`]: crate::engine::config::EngineConfig

pub mod batch;
pub mod calculate;
