//! Simulation error taxonomy.
//!
//! All checks are local and fail-fast: workload and quantum problems are
//! rejected before a simulation starts, metrics problems at aggregation
//! time. The computation is pure and deterministic, so nothing retries.

use thiserror::Error;

/// Convenience result alias used across the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Errors produced by validation, simulation, and reporting.
#[derive(Error, Debug)]
pub enum SimError {
    /// The workload cannot be simulated: empty, zero burst, or duplicate id.
    #[error("invalid workload: {0}")]
    InvalidWorkload(String),

    /// A non-positive quantum was supplied where one is required.
    #[error("invalid quantum: {0} (must be > 0)")]
    InvalidQuantum(u64),

    /// Metrics are undefined: empty completed sequence or zero elapsed time.
    #[error("metrics undefined: {0}")]
    MetricsUndefined(String),

    /// Writing an export file failed.
    #[error("export failed: {0}")]
    ExportFailed(#[from] std::io::Error),
}
