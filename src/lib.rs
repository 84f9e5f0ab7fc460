//! Deterministic CPU scheduling simulator.
//!
//! Simulates process scheduling under six classical disciplines — FCFS,
//! SJF, Round Robin, Priority, SRTF, and MLFQ — and computes comparative
//! performance metrics. Time is a logical counter advanced by policy
//! logic: the simulator is offline, single-threaded, and fully
//! deterministic, modeling dispatch decisions and time bookkeeping
//! rather than real threads or interrupts.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Metrics`
//! - **`policy`**: The six disciplines, the shared simulation engine,
//!   and the pluggable ready-queue/selection-rule abstractions
//! - **`metrics`**: Aggregate metrics over a completed run
//! - **`validation`**: Fail-fast workload and quantum checks
//! - **`workload`**: Seeded random and handcrafted workload generation
//! - **`runner`**: Cross-algorithm batch driver with failure isolation
//! - **`report`**: CSV export, console tables, 2-sigma outlier scanning
//!
//! # Usage
//!
//! ```
//! use cpu_schedsim::models::Process;
//! use cpu_schedsim::runner::{collect_metrics, Comparison};
//! use cpu_schedsim::report;
//!
//! let workload = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 1),
//! ];
//! let outcomes = Comparison::new(workload).with_quantum(2).run();
//! let csv = report::to_csv(&collect_metrics(&outcomes));
//! assert!(csv.starts_with("Algorithm,AWT,ATT"));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod report;
pub mod runner;
pub mod validation;
pub mod workload;

pub use error::{SimError, SimResult};
pub use models::{Metrics, Process, ProcessId, Ticks};
pub use policy::{Algorithm, CompletedRun, SchedulingPolicy};
