//! In-memory presentation surface.
//!
//! [`MemorySurface`] keeps the presentation state of every element in plain
//! structs and records each mutation in an operation log. It backs the CLI
//! and lets tests assert on exactly what the engine did to the surface.

use super::backend::{ControlGroup, Slot, Surface};
use crate::domain::ItemAttributes;
use std::collections::BTreeMap;
use std::time::Duration;

/// Visual state of an element's opacity/transform pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visual {
    /// No overrides.
    #[default]
    Neutral,
    /// Faded out and shifted down.
    Hidden,
    /// Fully opaque, in place.
    Shown,
}

/// Presentation state of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementState {
    /// Attributes reported to the engine.
    pub attributes: ItemAttributes,
    /// Whether the element takes part in layout.
    pub displayed: bool,
    /// Opacity/transform state.
    pub visual: Visual,
    /// Installed transition duration.
    pub transition: Option<Duration>,
}

/// One recorded surface mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    PrepareTransition(Slot),
    SetDisplayed(Slot, bool),
    BeginHide(Slot),
    Reveal(Slot),
    Reorder(Vec<Slot>),
    Reset(Slot),
    StatusCreated,
    Status(String),
    StatusRemoved,
    ActiveControl(ControlGroup, String),
}

/// A surface that lives entirely in memory.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    elements: Vec<ElementState>,
    order: Vec<Slot>,
    status_supported: bool,
    status: Option<String>,
    controls: BTreeMap<ControlGroup, String>,
    ops: Vec<SurfaceOp>,
}

impl MemorySurface {
    /// Creates a surface with one displayed element per attribute set and
    /// room for a status region.
    #[must_use]
    pub fn new(items: Vec<ItemAttributes>) -> Self {
        let order = (0..items.len()).collect();
        let elements = items
            .into_iter()
            .map(|attributes| ElementState {
                attributes,
                displayed: true,
                visual: Visual::Neutral,
                transition: None,
            })
            .collect();

        Self {
            elements,
            order,
            status_supported: true,
            status: None,
            controls: BTreeMap::new(),
            ops: Vec::new(),
        }
    }

    /// Removes the surface's room for a status region.
    #[must_use]
    pub fn without_status_region(mut self) -> Self {
        self.status_supported = false;
        self
    }

    #[must_use]
    pub fn element(&self, slot: Slot) -> Option<&ElementState> {
        self.elements.get(slot)
    }

    /// Current layout order of all elements, displayed or not.
    #[must_use]
    pub fn order(&self) -> &[Slot] {
        &self.order
    }

    /// Displayed elements in layout order.
    #[must_use]
    pub fn displayed_slots(&self) -> Vec<Slot> {
        self.order
            .iter()
            .copied()
            .filter(|&slot| self.elements[slot].displayed)
            .collect()
    }

    /// Text of the status region; `None` when no region exists.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Token of the pressed control in `group`.
    #[must_use]
    pub fn active_control(&self, group: ControlGroup) -> Option<&str> {
        self.controls.get(&group).map(String::as_str)
    }

    /// Every mutation recorded so far.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drains the operation log.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    fn with_element(&mut self, slot: Slot, op: SurfaceOp, apply: impl FnOnce(&mut ElementState)) {
        if let Some(element) = self.elements.get_mut(slot) {
            apply(element);
            self.ops.push(op);
        }
    }
}

impl Surface for MemorySurface {
    fn read_items(&self) -> Vec<ItemAttributes> {
        self.elements.iter().map(|e| e.attributes.clone()).collect()
    }

    fn prepare_transition(&mut self, slot: Slot, duration: Duration) {
        self.with_element(slot, SurfaceOp::PrepareTransition(slot), |e| {
            e.transition = Some(duration);
        });
    }

    fn set_displayed(&mut self, slot: Slot, displayed: bool) {
        self.with_element(slot, SurfaceOp::SetDisplayed(slot, displayed), |e| {
            e.displayed = displayed;
        });
    }

    fn begin_hide(&mut self, slot: Slot) {
        self.with_element(slot, SurfaceOp::BeginHide(slot), |e| e.visual = Visual::Hidden);
    }

    fn reveal(&mut self, slot: Slot) {
        self.with_element(slot, SurfaceOp::Reveal(slot), |e| e.visual = Visual::Shown);
    }

    fn reorder(&mut self, order: &[Slot]) {
        let moved: Vec<Slot> = order
            .iter()
            .copied()
            .filter(|&slot| slot < self.elements.len())
            .collect();
        self.order.retain(|slot| !moved.contains(slot));
        self.order.extend(moved.iter().copied());
        self.ops.push(SurfaceOp::Reorder(moved));
    }

    fn reset(&mut self, slot: Slot) {
        self.with_element(slot, SurfaceOp::Reset(slot), |e| {
            e.displayed = true;
            e.visual = Visual::Neutral;
            e.transition = None;
        });
    }

    fn create_status_region(&mut self) -> bool {
        if !self.status_supported {
            return false;
        }
        if self.status.is_none() {
            self.status = Some(String::new());
            self.ops.push(SurfaceOp::StatusCreated);
        }
        true
    }

    fn write_status(&mut self, message: &str) {
        if let Some(status) = self.status.as_mut() {
            message.clone_into(status);
            self.ops.push(SurfaceOp::Status(message.to_string()));
        }
    }

    fn remove_status_region(&mut self) {
        if self.status.take().is_some() {
            self.ops.push(SurfaceOp::StatusRemoved);
        }
    }

    fn mark_active_control(&mut self, group: ControlGroup, token: &str) {
        self.controls.insert(group, token.to_string());
        self.ops.push(SurfaceOp::ActiveControl(group, token.to_string()));
    }
}
