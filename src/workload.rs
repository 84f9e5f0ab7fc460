//! Workload generation.
//!
//! Produces process sets for simulation runs: uniform random, bimodal
//! burst mixes, identical-arrival stress sets, and handcrafted
//! descriptor lists. All randomized generators take an explicitly
//! passed `rand::Rng`, so a seeded generator reproduces the same
//! workload every time — global random state is never consulted.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use cpu_schedsim::workload;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let processes = workload::uniform(&mut rng, 10, 20, 1..=12, -2..=2);
//! assert_eq!(processes.len(), 10);
//! ```

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::{Process, ProcessId, Ticks};

/// Generates `count` processes with uniformly distributed arrivals,
/// bursts, and priorities. IDs are assigned 1..=count.
pub fn uniform<R: Rng>(
    rng: &mut R,
    count: usize,
    max_arrival: Ticks,
    burst_range: RangeInclusive<Ticks>,
    priority_range: RangeInclusive<i32>,
) -> Vec<Process> {
    (1..=count)
        .map(|id| {
            Process::new(
                id as ProcessId,
                rng.random_range(0..=max_arrival),
                rng.random_range(burst_range.clone()),
            )
            .with_priority(rng.random_range(priority_range.clone()))
        })
        .collect()
}

/// Generates a bimodal burst distribution: each process draws from
/// `long_range` with probability `long_fraction`, else `short_range`.
///
/// Useful for exposing convoy effects (FCFS) against preemptive
/// disciplines.
pub fn bimodal<R: Rng>(
    rng: &mut R,
    count: usize,
    max_arrival: Ticks,
    short_range: RangeInclusive<Ticks>,
    long_range: RangeInclusive<Ticks>,
    long_fraction: f64,
) -> Vec<Process> {
    (1..=count)
        .map(|id| {
            let burst = if rng.random_bool(long_fraction) {
                rng.random_range(long_range.clone())
            } else {
                rng.random_range(short_range.clone())
            };
            Process::new(id as ProcessId, rng.random_range(0..=max_arrival), burst)
        })
        .collect()
}

/// Generates `count` processes all arriving at t=0 (identical arrivals),
/// with uniformly distributed bursts. Exercises tie-breaking paths.
pub fn identical_arrivals<R: Rng>(
    rng: &mut R,
    count: usize,
    burst_range: RangeInclusive<Ticks>,
) -> Vec<Process> {
    (1..=count)
        .map(|id| {
            Process::new(
                id as ProcessId,
                0,
                rng.random_range(burst_range.clone()),
            )
        })
        .collect()
}

/// Builds a workload from `(id, arrival, burst, priority)` descriptors.
pub fn handcrafted(descriptors: &[(ProcessId, Ticks, Ticks, i32)]) -> Vec<Process> {
    descriptors
        .iter()
        .map(|&(id, arrival, burst, priority)| {
            Process::new(id, arrival, burst).with_priority(priority)
        })
        .collect()
}
