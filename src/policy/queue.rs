//! Pluggable ready structures.
//!
//! The shared simulation loop ([`super::engine`]) is written once; the
//! shape of the ready structure is what varies between disciplines:
//!
//! | Structure | Disciplines | Shape |
//! |-----------|------------|-------|
//! | [`OrderedQueue`] | FCFS, SJF, Priority, SRTF | sorted by a [`SelectionRule`] |
//! | [`FifoQueue`] | Round Robin | strict FIFO with fixed quantum |
//! | [`MlfqQueue`] | MLFQ | 3 FIFO levels, demotion on preemption |
//!
//! Every `dispatch` also reports the time slice the selected process is
//! entitled to, since slice length is a property of the structure the
//! process came from (most visibly in MLFQ).

use std::collections::{HashMap, VecDeque};

use super::{SelectionRule, Slice};
use crate::models::{Process, ProcessId, Ticks};

/// A policy-specific ready structure.
///
/// The engine admits arrivals through `admit` (first entry), takes the
/// next process with `dispatch`, and returns preempted processes through
/// `requeue`. Implementations must be deterministic: identical admission
/// sequences must produce identical dispatch sequences.
pub trait ReadyQueue {
    /// Admits a process for the first time.
    fn admit(&mut self, process: Process);

    /// Returns a preempted process to the structure.
    fn requeue(&mut self, process: Process);

    /// Removes and returns the next process to run and its slice.
    fn dispatch(&mut self) -> Option<(Process, Slice)>;

    /// Whether no process is ready.
    fn is_empty(&self) -> bool;
}

/// Ready list ordered by a selection rule.
///
/// Selection scans for the minimum `(score, arrival_time, id)` triple,
/// so equal-score processes resolve deterministically by arrival then id.
/// Used with [`Slice::ToCompletion`] for the non-preemptive disciplines
/// and with `Slice::Bounded(1)` for SRTF's unit-granularity re-selection.
#[derive(Debug)]
pub struct OrderedQueue<R: SelectionRule> {
    ready: Vec<Process>,
    rule: R,
    slice: Slice,
}

impl<R: SelectionRule> OrderedQueue<R> {
    /// Creates an ordered queue driven by `rule`, granting `slice` per dispatch.
    pub fn new(rule: R, slice: Slice) -> Self {
        Self {
            ready: Vec::new(),
            rule,
            slice,
        }
    }

    fn best_index(&self) -> Option<usize> {
        self.ready
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| (self.rule.evaluate(p), p.arrival_time, p.id))
            .map(|(i, _)| i)
    }
}

impl<R: SelectionRule> ReadyQueue for OrderedQueue<R> {
    fn admit(&mut self, mut process: Process) {
        process.admitted = true;
        self.ready.push(process);
    }

    fn requeue(&mut self, process: Process) {
        self.ready.push(process);
    }

    fn dispatch(&mut self) -> Option<(Process, Slice)> {
        let idx = self.best_index()?;
        Some((self.ready.remove(idx), self.slice))
    }

    fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }
}

/// Strict FIFO queue with a fixed quantum (Round Robin).
///
/// Preempted processes rejoin at the back of the same queue.
#[derive(Debug)]
pub struct FifoQueue {
    queue: VecDeque<Process>,
    quantum: Ticks,
}

impl FifoQueue {
    /// Creates a FIFO queue granting `quantum` ticks per dispatch.
    pub fn new(quantum: Ticks) -> Self {
        Self {
            queue: VecDeque::new(),
            quantum,
        }
    }
}

impl ReadyQueue for FifoQueue {
    fn admit(&mut self, mut process: Process) {
        process.admitted = true;
        self.queue.push_back(process);
    }

    fn requeue(&mut self, process: Process) {
        self.queue.push_back(process);
    }

    fn dispatch(&mut self) -> Option<(Process, Slice)> {
        let process = self.queue.pop_front()?;
        Some((process, Slice::Bounded(self.quantum)))
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Number of MLFQ levels.
pub const MLFQ_LEVELS: usize = 3;

/// Three-level feedback queue.
///
/// Level quanta are `[Q, 2Q, ∞]`. New arrivals always enter level 0;
/// service is strictly highest-level-first; a preempted process is
/// demoted to `min(level + 1, 2)`. Level 2 runs to completion, so a
/// process's level never decreases — there is no promotion or aging,
/// and sustained level-0 admission can starve demoted jobs.
#[derive(Debug)]
pub struct MlfqQueue {
    levels: [VecDeque<Process>; MLFQ_LEVELS],
    level_of: HashMap<ProcessId, usize>,
    quantum: Ticks,
}

impl MlfqQueue {
    /// Creates a feedback queue with base quantum `quantum`.
    pub fn new(quantum: Ticks) -> Self {
        Self {
            levels: Default::default(),
            level_of: HashMap::new(),
            quantum,
        }
    }

    /// Current level of a process, if it is known to the queue.
    pub fn level_of(&self, id: ProcessId) -> Option<usize> {
        self.level_of.get(&id).copied()
    }

    fn slice_for(&self, level: usize) -> Slice {
        match level {
            0 => Slice::Bounded(self.quantum),
            1 => Slice::Bounded(self.quantum * 2),
            _ => Slice::ToCompletion,
        }
    }
}

impl ReadyQueue for MlfqQueue {
    fn admit(&mut self, mut process: Process) {
        process.admitted = true;
        self.level_of.insert(process.id, 0);
        self.levels[0].push_back(process);
    }

    fn requeue(&mut self, process: Process) {
        let current = self.level_of.get(&process.id).copied().unwrap_or(0);
        let demoted = (current + 1).min(MLFQ_LEVELS - 1);
        self.level_of.insert(process.id, demoted);
        self.levels[demoted].push_back(process);
    }

    fn dispatch(&mut self) -> Option<(Process, Slice)> {
        for level in 0..MLFQ_LEVELS {
            if let Some(process) = self.levels[level].pop_front() {
                return Some((process, self.slice_for(level)));
            }
        }
        None
    }

    fn is_empty(&self) -> bool {
        self.levels.iter().all(VecDeque::is_empty)
    }
}
