//! Shared simulation loop.
//!
//! All six disciplines run through this single loop; they differ only in
//! the [`ReadyQueue`] they plug in. Per iteration:
//!
//! 1. Admit every pending process with `arrival_time <= clock`.
//! 2. If nothing is ready but arrivals remain, jump the clock to the
//!    next arrival (idle gap).
//! 3. Dispatch the structure's next process, record first response,
//!    run it for `min(slice, remaining)`, advance the clock.
//! 4. Finalize on zero remaining, otherwise requeue.
//!
//! A preempted process is requeued at the end of its iteration, before
//! the next iteration's admission step. Termination is guaranteed for
//! well-formed workloads: every dispatch strictly decreases total
//! remaining work.

use std::collections::VecDeque;

use log::{debug, trace};

use super::queue::ReadyQueue;
use super::{CompletedRun, Slice};
use crate::models::{Process, Ticks};

/// Runs a workload to completion through the given ready structure.
///
/// Consumes the workload: each policy run owns its private copy, so no
/// two runs can observe each other's state. The returned elapsed time is
/// the final clock value (the last completion tick).
pub fn run<Q: ReadyQueue>(workload: Vec<Process>, mut ready: Q) -> CompletedRun {
    let mut pending: Vec<Process> = workload;
    pending.sort_by_key(|p| (p.arrival_time, p.id));
    let mut pending: VecDeque<Process> = pending.into();

    let mut completed = Vec::with_capacity(pending.len());
    let mut clock: Ticks = 0;

    loop {
        while let Some(process) = pending.pop_front() {
            if process.arrival_time > clock {
                pending.push_front(process);
                break;
            }
            trace!("t={clock}: admit process {}", process.id);
            ready.admit(process);
        }

        if let Some((mut process, slice)) = ready.dispatch() {
            process.mark_dispatched(clock);
            let run_for = match slice {
                Slice::ToCompletion => process.remaining_time,
                Slice::Bounded(quantum) => quantum.min(process.remaining_time),
            };
            trace!("t={clock}: dispatch process {} for {run_for}", process.id);
            clock += run_for;
            process.run_for(run_for);

            if process.remaining_time == 0 {
                process.finalize(clock);
                debug!("t={clock}: process {} complete", process.id);
                completed.push(process);
            } else {
                ready.requeue(process);
            }
        } else if let Some(next) = pending.front() {
            // Idle gap: nothing ready, arrivals remain.
            trace!("t={clock}: idle until {}", next.arrival_time);
            clock = next.arrival_time;
        } else {
            break;
        }
    }

    CompletedRun {
        completed,
        elapsed: clock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::queue::{FifoQueue, OrderedQueue};
    use crate::policy::rules;

    fn workload() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ]
    }

    #[test]
    fn test_run_to_completion_order() {
        let queue = OrderedQueue::new(rules::EarliestArrival, Slice::ToCompletion);
        let run = run(workload(), queue);
        let ids: Vec<_> = run.completed.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(run.elapsed, 9);
    }

    #[test]
    fn test_idle_gap_advances_clock() {
        let queue = OrderedQueue::new(rules::EarliestArrival, Slice::ToCompletion);
        let run = run(vec![Process::new(1, 10, 2)], queue);
        let p = &run.completed[0];
        assert_eq!(p.completion_time, Some(12));
        assert_eq!(p.waiting_time, Some(0));
        assert_eq!(p.response_time, Some(0));
        assert_eq!(run.elapsed, 12);
    }

    #[test]
    fn test_conservation() {
        let queue = FifoQueue::new(2);
        let input = workload();
        let n = input.len();
        let run = run(input, queue);
        assert_eq!(run.completed.len(), n);
        let mut ids: Vec<_> = run.completed.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, [1, 2, 3]);
        assert!(run.completed.iter().all(|p| p.remaining_time == 0));
        assert!(run.completed.iter().all(|p| p.is_complete()));
    }

    #[test]
    fn test_empty_workload_terminates() {
        let queue = FifoQueue::new(2);
        let run = run(Vec::new(), queue);
        assert!(run.completed.is_empty());
        assert_eq!(run.elapsed, 0);
    }
}
