//! The mcc compiler driver.
//!
//! The binary (`mcc`) is a thin argument loop over this library: commands
//! are plain functions returning results, and [`reporting`] is the one place
//! that turns a failure into process output and an exit status.

pub mod commands;
pub mod config;
pub mod reporting;
mod tracing_setup;

pub use tracing_setup::init_tracing;
