//! Pipeline phase state machine.
//!
//! ```text
//! Idle ──command──▶ Recomputing ──▶ Settling ──last view timer──▶ Idle
//!                        ▲              │
//!                        └───command────┘
//! ```
//!
//! A command arriving while `Settling` does not wait: it recomputes at once and
//! the synchronizer supersedes the in-flight timers. Only the most recent
//! command's outcome is ever presented.

/// Where an engine is in its pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No view timers pending; filter state and visible set are stable.
    #[default]
    Idle,

    /// Building the predicate, filtering and sorting.
    ///
    /// Only observable from inside a pipeline run.
    Recomputing,

    /// The surface is being reconciled; reveal or settle timers are pending.
    Settling,
}
