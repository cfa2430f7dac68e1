//! # Engine Module
//!
//! This module orchestrates the melting-temperature pipeline for single primers and for
//! batches of primers.
//!
//! ## Overview
//!
//! A calculation runs validation → degenerate expansion → per-variant nearest-neighbor
//! accumulation → aggregation → ionic correction. [`tm::TmEngine`] performs these steps for
//! one request and reports any failure as data. [`batch::BatchScheduler`] fans requests out
//! over a bounded rayon pool, isolates failures per item and reassembles results in input
//! order.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Expansion cap, annealing offset, aggregation policy,
//!   worker count and recommended length bound
//! - **Single Calculations** ([`tm`]) - The per-primer orchestration
//! - **Batch Scheduling** ([`batch`]) - Parallel dispatch, positional reassembly and
//!   cooperative cancellation
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Per-item failure taxonomy and engine-level errors
//!
//! ## Concurrency
//!
//! Each calculation is a pure function of its request and the engine configuration. The only
//! shared state is the compile-time nearest-neighbor table, so workers need no locking.

pub mod batch;
pub mod config;
pub mod error;
pub mod progress;
pub mod tm;
