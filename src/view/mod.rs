//! Presentation side of the pipeline.
//!
//! - [`synchronizer`]: reconciles visible-set snapshots against the surface
//!   with staggered reveal and settle timers
//! - [`announce`]: single reusable live status region

pub mod announce;
pub mod synchronizer;

pub use announce::{Announcement, AnnouncementChannel};
pub use synchronizer::{ItemPhase, ViewSynchronizer, ViewTask};
