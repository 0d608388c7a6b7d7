//! huepanel - HSV color picker core and settings control panel
//!
//! This crate provides the logic layer of a color picker widget: pure
//! HSV/RGB conversion, a controller that keeps one authoritative color
//! consistent across pointer drags and numeric RGB fields, and the control
//! panel state that assembles outbound settings payloads. Rendering and
//! network transmission are left to the embedding host.

mod color;
mod config;
mod event;
mod panel;
mod picker;
mod state;

pub use color::{hsv_to_rgb, rgb_to_hsv, Hsv, PartialHsv, Rgb};
pub use config::{ConfigError, PickerConfig};
pub use event::{PickerEvent, Surface};
pub use panel::{ControlPanel, Payload};
pub use picker::{ColorPicker, Snapshot};
pub use state::{DragState, SurfaceDragState};
