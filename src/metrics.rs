//! Metrics computation.
//!
//! Pure aggregation over one completed run. Division by the process
//! count and the elapsed time makes empty sequences and zero elapsed
//! time undefined, so both are rejected with an explicit error rather
//! than producing NaN or infinity.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use crate::error::{SimError, SimResult};
use crate::models::{Metrics, Process, Ticks};

/// Computes aggregate metrics for one completed run.
///
/// # Arguments
/// * `name` - Algorithm name recorded on the result.
/// * `completed` - The completed sequence, every timing field populated.
/// * `total_elapsed` - Total elapsed ticks, including idle gaps.
///
/// # Errors
/// [`SimError::MetricsUndefined`] if `completed` is empty or
/// `total_elapsed` is zero.
pub fn calculate(name: &str, completed: &[Process], total_elapsed: Ticks) -> SimResult<Metrics> {
    if completed.is_empty() {
        return Err(SimError::MetricsUndefined(
            "empty completed sequence".into(),
        ));
    }
    if total_elapsed == 0 {
        return Err(SimError::MetricsUndefined(
            "total elapsed time is zero".into(),
        ));
    }

    let count = completed.len() as f64;
    let mut total_waiting: Ticks = 0;
    let mut total_turnaround: Ticks = 0;
    let mut total_response: Ticks = 0;
    let mut total_burst: Ticks = 0;

    for p in completed {
        total_waiting += p.waiting_time.unwrap_or_default();
        total_turnaround += p.turnaround_time.unwrap_or_default();
        total_response += p.response_time.unwrap_or_default();
        total_burst += p.burst_time;
    }

    Ok(Metrics {
        name: name.to_string(),
        avg_waiting_time: total_waiting as f64 / count,
        avg_turnaround_time: total_turnaround as f64 / count,
        cpu_utilization_percent: total_burst as f64 / total_elapsed as f64 * 100.0,
        throughput: count / total_elapsed as f64,
        avg_response_time: total_response as f64 / count,
    })
}
