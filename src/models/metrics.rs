//! Run-level performance metrics.
//!
//! A [`Metrics`] record is a read-only aggregate derived from one
//! completed run. Computation lives in [`crate::metrics`]; this module
//! only defines the shape.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | AWT | Mean waiting time across processes |
//! | ATT | Mean turnaround time |
//! | CPU Utilization | Sum of bursts / total elapsed × 100 |
//! | Throughput | Process count / total elapsed |
//! | ART | Mean response time |

use serde::{Deserialize, Serialize};

/// Aggregate performance indicators for one algorithm run.
///
/// All time averages are in ticks; `throughput` is processes per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Algorithm name (e.g. "FCFS", "MLFQ").
    pub name: String,
    /// Average waiting time.
    pub avg_waiting_time: f64,
    /// Average turnaround time.
    pub avg_turnaround_time: f64,
    /// CPU busy fraction, 0.0..=100.0 (100 = no idle gaps).
    pub cpu_utilization_percent: f64,
    /// Completed processes per tick of elapsed time.
    pub throughput: f64,
    /// Average response time (arrival to first dispatch).
    pub avg_response_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_serde_roundtrip() {
        let m = Metrics {
            name: "FCFS".into(),
            avg_waiting_time: 3.5,
            avg_turnaround_time: 6.5,
            cpu_utilization_percent: 100.0,
            throughput: 0.25,
            avg_response_time: 3.5,
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: Metrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
