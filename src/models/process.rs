//! Process (job) model.
//!
//! A process is the unit of work dispatched by a scheduling policy.
//! Created with immutable identity and demand, it accumulates timing
//! state during a simulation run and becomes terminal once completed.
//!
//! # Time Representation
//! All times are logical ticks relative to the simulation epoch (t=0).
//! The clock is advanced by policy logic, never by wall-clock time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Logical simulation time, in ticks.
pub type Ticks = u64;

/// Unique process identifier.
pub type ProcessId = u32;

/// A process tracked through one simulation run.
///
/// `id`, `arrival_time`, `burst_time`, and `priority` are fixed at
/// creation. The remaining fields are populated by the simulation:
/// `response_time` at first dispatch, the rest at completion.
///
/// # Timing Identities
/// Once terminal, `turnaround_time = completion_time - arrival_time`
/// and `waiting_time = turnaround_time - burst_time` hold exactly,
/// for every policy, preemptive or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier, stable across the run.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible for scheduling.
    pub arrival_time: Ticks,
    /// Total CPU demand (ticks). Always > 0 for a valid workload.
    pub burst_time: Ticks,
    /// Scheduling priority. Lower value = more urgent.
    pub priority: i32,
    /// CPU demand not yet served. Starts at `burst_time`, reaches 0 at completion.
    pub remaining_time: Ticks,
    /// Tick of completion. `None` until terminal.
    pub completion_time: Option<Ticks>,
    /// Total time spent ready but not running. `None` until terminal.
    pub waiting_time: Option<Ticks>,
    /// Completion minus arrival. `None` until terminal.
    pub turnaround_time: Option<Ticks>,
    /// Delay between arrival and first dispatch. Set exactly once.
    pub response_time: Option<Ticks>,
    /// Whether the process has entered a ready structure at least once.
    pub admitted: bool,
}

impl Process {
    /// Creates a process with the given identity, arrival, and demand.
    ///
    /// Priority defaults to 0; use [`with_priority`](Self::with_priority)
    /// to override.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
            response_time: None,
            admitted: false,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Records the first CPU dispatch at `now`.
    ///
    /// Idempotent: `response_time` is written only on the first call,
    /// so preemptive policies may call this on every dispatch.
    pub fn mark_dispatched(&mut self, now: Ticks) {
        if self.response_time.is_none() {
            self.response_time = Some(now - self.arrival_time);
        }
    }

    /// Consumes `ticks` of CPU service, saturating at zero remaining.
    pub fn run_for(&mut self, ticks: Ticks) {
        self.remaining_time = self.remaining_time.saturating_sub(ticks);
    }

    /// Finalizes the process at completion tick `now`.
    ///
    /// Derives `turnaround_time` and `waiting_time` from the timing
    /// identities. The record is terminal afterwards.
    pub fn finalize(&mut self, now: Ticks) {
        debug_assert_eq!(self.remaining_time, 0);
        let turnaround = now - self.arrival_time;
        self.completion_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }

    /// Whether the process has completed.
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }
}
