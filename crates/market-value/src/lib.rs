//! Benchmark-driven estimate of a professional's real market value.
//!
//! [`scoring`] holds the deterministic engine and its reference data;
//! [`valuation`] wraps it with request intake, aggregate publishing, and an
//! axum router.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
pub mod valuation;
