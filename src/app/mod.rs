//! Application layer: engines, commands and the phase state machine.
//!
//! This module sits between the host (a page script, the CLI, a test) and the
//! domain/query/view layers. It owns every per-collection resource and drives
//! the filter pipeline.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host input → Command → handle_command → FilterState → Pipeline → Surface
//!                                             ↑                       │
//!                                             └──── Engine::advance ──┘
//!                                               (debounce, reveal, settle)
//! ```
//!
//! # Modules
//!
//! - [`engine`]: Per-collection owner of state, timers and the surface
//! - [`handler`]: Command dispatch onto an engine
//! - [`modes`]: Pipeline phase state machine
//! - [`registry`]: Attach-once bookkeeping for several collections
//! - [`script`]: Line-oriented command scripts used by the CLI
//!
//! # Example
//!
//! ```rust
//! use faceted_collection::app::{handle_command, Command, Engine};
//! use faceted_collection::domain::SortKey;
//! use faceted_collection::surface::MemorySurface;
//! use faceted_collection::Config;
//!
//! let mut engine = Engine::attach(MemorySurface::new(vec![]), &Config::default());
//! handle_command(&mut engine, &Command::SelectSort(SortKey::Title));
//! ```

pub mod engine;
pub mod handler;
pub mod modes;
pub mod registry;
pub mod script;

pub use engine::{Engine, TimerTask};
pub use handler::{handle_command, Command};
pub use modes::Phase;
pub use registry::CollectionRegistry;
pub use script::{parse_script, ScriptStep};
