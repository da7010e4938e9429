//! Cooperative timing: cancellable tasks and debouncing.
//!
//! - [`scheduler`]: virtual-clock task queue with idempotent cancellation
//! - [`debounce`]: one-pending-commit coalescing for search input

pub mod debounce;
pub mod scheduler;

pub use debounce::Debouncer;
pub use scheduler::{Scheduler, TaskToken};
