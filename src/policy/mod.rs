//! Scheduling policies and the shared simulation engine.
//!
//! Six classical disciplines behind one contract: a [`SchedulingPolicy`]
//! consumes a workload (and an optional quantum) and produces a
//! [`CompletedRun`] with every timing field populated. The disciplines
//! share a single simulation loop ([`engine`]) and differ only in the
//! [`queue::ReadyQueue`] they plug into it, parameterized where useful by
//! a [`SelectionRule`] score.
//!
//! # Usage
//!
//! ```
//! use cpu_schedsim::models::Process;
//! use cpu_schedsim::policy::{Algorithm, SchedulingPolicy};
//!
//! let workload = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let run = Algorithm::Sjf.policy().schedule(&workload, None).unwrap();
//! assert_eq!(run.completed.len(), 2);
//! ```
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod disciplines;
pub mod engine;
pub mod queue;
pub mod rules;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub use disciplines::{Fcfs, Mlfq, Priority, RoundRobin, Sjf, Srtf, MLFQ_DEFAULT_QUANTUM};

use crate::error::SimResult;
use crate::models::{Process, Ticks};

/// Score returned by a selection rule.
///
/// Lower scores = selected first; ties resolve by arrival time, then id.
pub type RuleScore = i64;

/// A scoring function over ready processes.
///
/// # Score Convention
/// **Lower score = selected first.** Rules must be pure functions of the
/// process state so that selection stays deterministic.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g. "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process. Lower = selected first.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// CPU time granted to one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    /// Run until `remaining_time` reaches zero (non-preemptive).
    ToCompletion,
    /// Run at most this many ticks, then requeue if unfinished.
    Bounded(Ticks),
}

/// Output of one policy run: the completed sequence plus the total
/// elapsed time (the final clock value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedRun {
    /// Every input process, in completion order, all timing fields set.
    pub completed: Vec<Process>,
    /// Total elapsed ticks, including idle gaps.
    pub elapsed: Ticks,
}

/// One scheduling discipline.
///
/// Implementations are stateless; `schedule` validates its inputs,
/// simulates over a private copy of the workload, and never mutates the
/// caller's processes.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Discipline name (e.g. "FCFS", "MLFQ").
    fn name(&self) -> &'static str;

    /// Runs the workload to completion.
    ///
    /// `quantum` is required for Round Robin, defaulted for MLFQ, and
    /// ignored by the non-preemptive disciplines and SRTF.
    fn schedule(&self, workload: &[Process], quantum: Option<Ticks>) -> SimResult<CompletedRun>;
}

/// Tagged selector over the six built-in disciplines.
///
/// Useful where a policy has to be named in data (configuration, CSV
/// rows, batch runs) rather than as a generic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come First-Served.
    Fcfs,
    /// Shortest Job First.
    Sjf,
    /// Round Robin.
    RoundRobin,
    /// Non-preemptive priority.
    Priority,
    /// Shortest Remaining Time First.
    Srtf,
    /// Multi-Level Feedback Queue.
    Mlfq,
}

impl Algorithm {
    /// All disciplines, in conventional presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
        Algorithm::Srtf,
        Algorithm::Mlfq,
    ];

    /// The strategy implementing this discipline.
    pub fn policy(&self) -> &'static dyn SchedulingPolicy {
        match self {
            Algorithm::Fcfs => &Fcfs,
            Algorithm::Sjf => &Sjf,
            Algorithm::RoundRobin => &RoundRobin,
            Algorithm::Priority => &Priority,
            Algorithm::Srtf => &Srtf,
            Algorithm::Mlfq => &Mlfq,
        }
    }

    /// Discipline name (e.g. "FCFS").
    pub fn name(&self) -> &'static str {
        self.policy().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_dispatch() {
        assert_eq!(Algorithm::Fcfs.name(), "FCFS");
        assert_eq!(Algorithm::RoundRobin.name(), "RR");
        assert_eq!(Algorithm::Mlfq.name(), "MLFQ");
        assert_eq!(Algorithm::ALL.len(), 6);
    }

    #[test]
    fn test_every_algorithm_schedules() {
        let workload = vec![Process::new(1, 0, 4), Process::new(2, 2, 2)];
        for algorithm in Algorithm::ALL {
            let run = algorithm
                .policy()
                .schedule(&workload, Some(2))
                .unwrap_or_else(|e| panic!("{} failed: {e}", algorithm.name()));
            assert_eq!(run.completed.len(), 2, "{}", algorithm.name());
        }
    }

    #[test]
    fn test_timing_invariants_hold_for_all_algorithms() {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        let mut rng = SmallRng::seed_from_u64(1234);
        let workload = crate::workload::uniform(&mut rng, 30, 40, 1..=15, -3..=3);
        let mut expected_ids: Vec<_> = workload.iter().map(|p| p.id).collect();
        expected_ids.sort_unstable();

        for algorithm in Algorithm::ALL {
            let name = algorithm.name();
            let run = algorithm
                .policy()
                .schedule(&workload, Some(3))
                .unwrap_or_else(|e| panic!("{name} failed: {e}"));

            // Conservation: every input exactly once.
            let mut ids: Vec<_> = run.completed.iter().map(|p| p.id).collect();
            ids.sort_unstable();
            assert_eq!(ids, expected_ids, "{name}");

            for p in &run.completed {
                let completion = p.completion_time.unwrap();
                let turnaround = p.turnaround_time.unwrap();
                let waiting = p.waiting_time.unwrap();
                let response = p.response_time.unwrap();

                assert_eq!(p.remaining_time, 0, "{name} P{}", p.id);
                assert!(p.admitted, "{name} P{}", p.id);
                assert_eq!(turnaround, completion - p.arrival_time, "{name} P{}", p.id);
                assert_eq!(waiting, turnaround - p.burst_time, "{name} P{}", p.id);
                assert!(response <= waiting, "{name} P{}", p.id);
                assert!(completion <= run.elapsed, "{name} P{}", p.id);
            }
        }
    }
}
