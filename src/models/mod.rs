//! Simulation domain models.
//!
//! Core data types for representing scheduling workloads and results:
//! the mutable [`Process`] record tracked through a run, and the derived
//! read-only [`Metrics`] aggregate.
//!
//! # Lifecycle
//!
//! | Stage | State |
//! |-------|-------|
//! | Created | id/arrival/burst/priority fixed, timing fields unset |
//! | Admitted | entered a ready structure, `admitted = true` |
//! | Dispatched | `response_time` set (exactly once) |
//! | Terminal | appended to the completed sequence, all fields populated |

mod metrics;
mod process;

pub use metrics::Metrics;
pub use process::{Process, ProcessId, Ticks};
