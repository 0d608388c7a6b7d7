//! Drag-interaction state for the picker surfaces.
//!
//! Gesture bookkeeping lives here as an explicit two-state machine per
//! surface, so the host binding only forwards raw events and begin/end
//! signals.

use crate::event::Surface;

/// Drag state for a single interactive surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Not dragging; pointer moves are ignored
    #[default]
    Idle,
    /// Dragging; pointer moves update the color
    Dragging,
}

impl DragState {
    /// Check whether this surface is being dragged.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging)
    }
}

/// Independent drag states for the plane and line surfaces.
///
/// The two surfaces never share a state: a drag on one neither blocks nor
/// ends a drag on the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceDragState {
    pub plane: DragState,
    pub line: DragState,
}

impl SurfaceDragState {
    /// Start a drag on the given surface.
    pub fn start_drag(&mut self, surface: Surface) {
        *self.slot_mut(surface) = DragState::Dragging;
    }

    /// End a drag on the given surface. Redundant stops are no-ops, so hosts
    /// may safely issue synthetic releases.
    pub fn stop_drag(&mut self, surface: Surface) {
        *self.slot_mut(surface) = DragState::Idle;
    }

    /// Check whether the given surface is being dragged.
    pub fn is_dragging(&self, surface: Surface) -> bool {
        match surface {
            Surface::Plane => self.plane.is_dragging(),
            Surface::Line => self.line.is_dragging(),
        }
    }

    fn slot_mut(&mut self, surface: Surface) -> &mut DragState {
        match surface {
            Surface::Plane => &mut self.plane,
            Surface::Line => &mut self.line,
        }
    }
}
