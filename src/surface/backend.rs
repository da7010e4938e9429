//! Presentation surface abstraction.
//!
//! This module defines the [`Surface`] trait the engine drives. A surface is
//! whatever actually shows the cards: a DOM container, a terminal list, or the
//! in-memory [`MemorySurface`](super::MemorySurface) used by tests and the CLI.
//!
//! # Design
//!
//! The trait is minimal and maps directly to the presentation changes the
//! engine needs. Elements are addressed by [`Slot`], the position at which the
//! surface reported the element from [`Surface::read_items`]. Slots are
//! presentation identity only; item identity is the [`ItemId`](crate::domain::ItemId).

use crate::domain::ItemAttributes;
use std::fmt;
use std::time::Duration;

/// Position of an element in the surface's original item list.
pub type Slot = usize;

/// Group of mutually exclusive controls on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlGroup {
    /// Category filter buttons.
    Category,
    /// Sort buttons.
    Sort,
}

impl fmt::Display for ControlGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => f.write_str("category"),
            Self::Sort => f.write_str("sort"),
        }
    }
}

/// A presentation surface the engine can show, hide, reorder and annotate.
///
/// All methods are infallible: a surface that cannot perform an operation
/// ignores it. The engine only calls these methods from its own thread.
pub trait Surface {
    /// Reads every item's raw attributes, in slot order.
    ///
    /// Called once when an engine attaches.
    fn read_items(&self) -> Vec<ItemAttributes>;

    /// Installs the reveal/hide transition on an element.
    fn prepare_transition(&mut self, slot: Slot, duration: Duration);

    /// Shows or removes an element from layout. A removed element is hidden
    /// and non-interactive.
    fn set_displayed(&mut self, slot: Slot, displayed: bool);

    /// Starts the hide transition (fade out, shift down).
    fn begin_hide(&mut self, slot: Slot);

    /// Completes the reveal transition (fade in, shift back into place).
    fn reveal(&mut self, slot: Slot);

    /// Moves the given elements, in this order, after all others.
    fn reorder(&mut self, order: &[Slot]);

    /// Restores an element to its neutral baseline: displayed, with no
    /// opacity, transform or transition overrides.
    fn reset(&mut self, slot: Slot);

    /// Creates the live status region. Returns `false` if the surface has no
    /// place for one.
    fn create_status_region(&mut self) -> bool {
        false
    }

    /// Replaces the text of the live status region.
    fn write_status(&mut self, _message: &str) {}

    /// Removes the live status region.
    fn remove_status_region(&mut self) {}

    /// Marks the control carrying `token` as pressed and every other control
    /// in `group` as released.
    fn mark_active_control(&mut self, _group: ControlGroup, _token: &str) {}
}
