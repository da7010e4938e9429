//! Presentation surfaces.
//!
//! - `backend`: the [`Surface`] trait the engine drives
//! - `memory`: [`MemorySurface`], an in-memory recording implementation

pub mod backend;
pub mod memory;

pub use backend::{ControlGroup, Slot, Surface};
pub use memory::{ElementState, MemorySurface, SurfaceOp, Visual};
