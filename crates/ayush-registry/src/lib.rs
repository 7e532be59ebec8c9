//! Registry for AYUSH wellness startup applications: intake validation, heuristic scoring,
//! and reviewer workflow over a pluggable repository.

pub mod applications;
pub mod config;
pub mod error;
pub mod telemetry;
