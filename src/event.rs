//! Pointer events delivered by the host binding.

/// The two interactive regions of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The square saturation/value plane
    Plane,
    /// The hue line
    Line,
}

/// Pointer input targeted at a picker surface.
///
/// Coordinates are pixel offsets from the surface's top-left corner; the host
/// translates from window space and collapses mouse/touch into these
/// device-agnostic events. A host should synthesize a `PointerReleased` on
/// any global pointer-up or cancel so a drag cannot get stuck when the
/// release lands outside the tracked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerEvent {
    /// Pointer pressed on a surface.
    PointerPressed {
        surface: Surface,
        position: (f32, f32),
    },
    /// Pointer moved while over (or dragging from) a surface.
    PointerMoved {
        surface: Surface,
        position: (f32, f32),
    },
    /// Pointer released, ending any drag on the surface.
    PointerReleased { surface: Surface },
}
