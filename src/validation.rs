//! Input validation for simulation runs.
//!
//! Checks structural integrity of a workload and its quantum parameter
//! before any simulation starts. Detects:
//! - Empty workloads
//! - Zero burst times
//! - Duplicate process IDs
//! - Zero quanta where a quantum is required
//!
//! Arrival and burst times are unsigned ticks, so negative values are
//! unrepresentable and need no check.

use std::collections::HashSet;

use crate::error::{SimError, SimResult};
use crate::models::{Process, Ticks};

/// Validates a workload before simulation.
///
/// Checks:
/// 1. At least one process
/// 2. Every burst time > 0
/// 3. No duplicate process IDs
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise the first
/// [`SimError::InvalidWorkload`] encountered (fail-fast).
pub fn validate_workload(workload: &[Process]) -> SimResult<()> {
    if workload.is_empty() {
        return Err(SimError::InvalidWorkload("empty workload".into()));
    }

    let mut seen = HashSet::new();
    for p in workload {
        if p.burst_time == 0 {
            return Err(SimError::InvalidWorkload(format!(
                "process {} has zero burst time",
                p.id
            )));
        }
        if !seen.insert(p.id) {
            return Err(SimError::InvalidWorkload(format!(
                "duplicate process ID: {}",
                p.id
            )));
        }
    }

    Ok(())
}

/// Validates a quantum for policies that require one (RR, MLFQ).
pub fn validate_quantum(quantum: Ticks) -> SimResult<()> {
    if quantum == 0 {
        return Err(SimError::InvalidQuantum(quantum));
    }
    Ok(())
}
