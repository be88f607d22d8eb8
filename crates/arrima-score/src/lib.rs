//! Arrima ranking score estimator.
//!
//! The [`scoring`] module holds the rubric and the pure scoring functions; the remaining
//! modules carry the configuration, error and telemetry plumbing shared with the HTTP service.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
