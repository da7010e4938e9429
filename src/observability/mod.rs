//! Tracing setup for hosts and the CLI.
//!
//! The library only emits `tracing` spans and events; it never installs a
//! subscriber on its own. Binaries call [`init_tracing`] once at startup.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use faceted_collection::observability::init_tracing;
//! use faceted_collection::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("collection host started");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber construction and installation

mod init;

pub use init::{env_filter, init_tracing};
