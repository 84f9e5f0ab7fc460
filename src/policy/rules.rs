//! Built-in selection rules.
//!
//! Each rule scores a ready process; ordered ready structures pick the
//! process with the lowest score, breaking ties by arrival time then id.
//!
//! # Score Convention
//! **Lower score = selected first.** This follows the academic
//! convention where SJF = shortest job first.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use super::{RuleScore, SelectionRule};
use crate::models::Process;

/// Earliest arrival first (FCFS order).
///
/// # Reference
/// Optimal for nothing, fair for everything: the baseline discipline.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time as RuleScore
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival Time"
    }
}

/// Shortest total burst first (SJF order).
///
/// # Reference
/// Provably optimal for mean waiting time among non-preemptive
/// disciplines when all jobs arrive together (Smith, 1956).
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time as RuleScore
    }

    fn description(&self) -> &'static str {
        "Shortest Burst Time"
    }
}

/// Lowest priority value first.
///
/// Priority values follow the urgency convention: lower = more urgent,
/// so no negation is needed.
#[derive(Debug, Clone, Copy)]
pub struct MostUrgent;

impl SelectionRule for MostUrgent {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.priority as RuleScore
    }

    fn description(&self) -> &'static str {
        "Most Urgent Priority"
    }
}

/// Shortest remaining service first (SRTF order).
///
/// Re-evaluated at every dispatch, so the score tracks the mutable
/// `remaining_time` rather than the fixed burst.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.remaining_time as RuleScore
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earliest_arrival() {
        let early = Process::new(1, 0, 5);
        let late = Process::new(2, 9, 5);
        assert!(EarliestArrival.evaluate(&early) < EarliestArrival.evaluate(&late));
    }

    #[test]
    fn test_shortest_burst() {
        let short = Process::new(1, 0, 2);
        let long = Process::new(2, 0, 8);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_most_urgent() {
        let urgent = Process::new(1, 0, 5).with_priority(-1);
        let relaxed = Process::new(2, 0, 5).with_priority(3);
        assert!(MostUrgent.evaluate(&urgent) < MostUrgent.evaluate(&relaxed));
    }

    #[test]
    fn test_shortest_remaining_tracks_service() {
        let mut served = Process::new(1, 0, 8);
        served.run_for(6); // remaining 2
        let fresh = Process::new(2, 0, 4);
        assert!(ShortestRemaining.evaluate(&served) < ShortestRemaining.evaluate(&fresh));
    }
}
