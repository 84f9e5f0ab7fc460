//! Batch driver for cross-algorithm comparison.
//!
//! Runs a workload through a list of disciplines, each over its own
//! private copy, and collects one [`RunReport`] per discipline in input
//! order. Failures are isolated: a discipline that rejects its inputs is
//! reported and logged, and the batch continues with the rest.

use log::{info, warn};

use crate::error::SimResult;
use crate::metrics;
use crate::models::{Metrics, Process, Ticks};
use crate::policy::{Algorithm, CompletedRun};

/// Result of one discipline's run: the completed sequence plus its
/// aggregate metrics.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The completed run (sequence + elapsed time).
    pub run: CompletedRun,
    /// Aggregate metrics for the run.
    pub metrics: Metrics,
}

/// Outcome slot for one discipline in a batch, preserving input order
/// even when the run failed.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The discipline that ran.
    pub algorithm: Algorithm,
    /// The report, or why this discipline's run failed.
    pub result: SimResult<RunReport>,
}

/// A configured comparison batch.
///
/// # Usage
///
/// ```
/// use cpu_schedsim::models::Process;
/// use cpu_schedsim::runner::Comparison;
///
/// let workload = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let outcomes = Comparison::new(workload).with_quantum(2).run();
/// assert_eq!(outcomes.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Comparison {
    workload: Vec<Process>,
    quantum: Option<Ticks>,
    algorithms: Vec<Algorithm>,
}

impl Comparison {
    /// Creates a batch over all six disciplines.
    pub fn new(workload: Vec<Process>) -> Self {
        Self {
            workload,
            quantum: None,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }

    /// Sets the quantum for Round Robin and MLFQ.
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Restricts the batch to the given disciplines, in the given order.
    pub fn with_algorithms(mut self, algorithms: impl Into<Vec<Algorithm>>) -> Self {
        self.algorithms = algorithms.into();
        self
    }

    /// Runs every discipline and collects outcomes in input order.
    ///
    /// Each run operates on a private copy of the workload, so runs can
    /// never cross-contaminate state. A failed run is logged and carried
    /// as an `Err` slot; it never aborts the batch.
    pub fn run(&self) -> Vec<BatchOutcome> {
        self.algorithms
            .iter()
            .map(|&algorithm| {
                let result = self.run_one(algorithm);
                if let Err(e) = &result {
                    warn!("{} run failed: {e}", algorithm.name());
                }
                BatchOutcome { algorithm, result }
            })
            .collect()
    }

    fn run_one(&self, algorithm: Algorithm) -> SimResult<RunReport> {
        let run = algorithm.policy().schedule(&self.workload, self.quantum)?;
        let metrics = metrics::calculate(algorithm.name(), &run.completed, run.elapsed)?;
        info!(
            "{}: {} processes in {} ticks, AWT {:.2}",
            algorithm.name(),
            run.completed.len(),
            run.elapsed,
            metrics.avg_waiting_time
        );
        Ok(RunReport { run, metrics })
    }
}

/// Extracts the metrics of the successful runs, preserving batch order.
pub fn collect_metrics(outcomes: &[BatchOutcome]) -> Vec<Metrics> {
    outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok().map(|r| r.metrics.clone()))
        .collect()
}
