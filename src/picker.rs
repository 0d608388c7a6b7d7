//! The color picker controller.
//!
//! [`ColorPicker`] owns the one authoritative color, held in both HSV and
//! RGB form. Each input path declares one form authoritative and fully
//! recomputes the other before returning, so the two forms never visibly
//! disagree:
//!
//! - pointer drags on the saturation/value plane or the hue line set HSV
//!   coordinates and derive RGB;
//! - the numeric RGB fields set RGB and derive HSV.
//!
//! Every mutation returns a [`Snapshot`] for the rendering host. The
//! controller performs no I/O and is driven synchronously by the host's
//! event dispatch.

use crate::color::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgb};
use crate::config::{ConfigError, PickerConfig};
use crate::event::{PickerEvent, Surface};
use crate::state::SurfaceDragState;

/// Default color: pure red at full saturation and brightness.
const DEFAULT_HSV: Hsv = Hsv::new(0, 100, 100);

/// Render-ready view of the picker state, emitted after every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Current color
    pub rgb: Rgb,
    /// Cursor x on the saturation/value plane, normalized to [0, 1]
    pub plane_x: f32,
    /// Cursor y on the saturation/value plane, normalized to [0, 1];
    /// value increases upward, so y = 0 is full brightness
    pub plane_y: f32,
    /// Cursor position along the hue line, normalized to [0, 1]
    pub line_t: f32,
}

/// Controller for a single picker instance.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    hsv: Hsv,
    rgb: Rgb,
    drag: SurfaceDragState,
    config: PickerConfig,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self {
            hsv: DEFAULT_HSV,
            rgb: hsv_to_rgb(DEFAULT_HSV),
            drag: SurfaceDragState::default(),
            config: PickerConfig::default(),
        }
    }
}

impl ColorPicker {
    /// Create a picker with the given surface geometry.
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// The current HSV form of the color. Hosts use the hue to paint the
    /// plane's base gradient.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The last-committed RGB triple. Reflects the most recent mutation with
    /// no staleness window.
    pub fn current_rgb(&self) -> Rgb {
        self.rgb
    }

    /// Check whether the given surface is currently being dragged.
    pub fn is_dragging(&self, surface: Surface) -> bool {
        self.drag.is_dragging(surface)
    }

    /// Update saturation and value from a pointer position on the plane.
    ///
    /// Coordinates are clamped into the plane box, so out-of-bounds input is
    /// never an error. Hue is untouched; RGB is rederived from HSV.
    pub fn update_from_plane_pointer(&mut self, x: f32, y: f32) -> Snapshot {
        let size = self.config.plane_size;
        let x = x.clamp(0.0, size);
        let y = y.clamp(0.0, size);

        self.hsv.saturation = (x / size * 100.0).round() as u8;
        self.hsv.value = ((1.0 - y / size) * 100.0).round() as u8;
        self.rgb = hsv_to_rgb(self.hsv);
        self.snapshot()
    }

    /// Update hue from a pointer position on the hue line.
    ///
    /// The coordinate is clamped into the line; a full-length offset wraps
    /// from 360 back to 0 so hue stays in [0, 360). Saturation and value are
    /// untouched; RGB is rederived from HSV.
    pub fn update_from_line_pointer(&mut self, y: f32) -> Snapshot {
        let length = self.config.line_length;
        let y = y.clamp(0.0, length);

        let hue = (y / length * 360.0).round() as u16;
        self.hsv.hue = if hue == 360 { 0 } else { hue };
        self.rgb = hsv_to_rgb(self.hsv);
        self.snapshot()
    }

    /// Update the color from the three numeric field strings.
    ///
    /// Fields are parsed independently: an invalid field falls back to that
    /// channel's previous value and an out-of-range field is clamped, so one
    /// bad field never invalidates the other two. If the resulting triple is
    /// unchanged the lossy RGB->HSV round trip is skipped entirely. When the
    /// new triple is grayscale the previous hue is retained, so raising
    /// saturation later restores it instead of snapping to red.
    ///
    /// The returned snapshot re-emits all three channels so the host can
    /// echo corrected values back into the fields.
    pub fn update_from_rgb_fields(&mut self, r: &str, g: &str, b: &str) -> Snapshot {
        let next = Rgb::new(
            parse_channel(r).unwrap_or(self.rgb.r),
            parse_channel(g).unwrap_or(self.rgb.g),
            parse_channel(b).unwrap_or(self.rgb.b),
        );

        if next != self.rgb {
            self.rgb = next;
            self.hsv = rgb_to_hsv(next).with_hue_fallback(self.hsv.hue);
        }
        self.snapshot()
    }

    /// Drive the per-surface drag state machine with a host pointer event.
    ///
    /// A press starts a drag and applies one immediate update at the down
    /// position; moves update the color only while that surface is dragging
    /// and are ignored otherwise; a release ends the drag without mutating
    /// the color. Returns the new snapshot when the event mutated state and
    /// `None` when it was ignored.
    pub fn handle_event(&mut self, event: &PickerEvent) -> Option<Snapshot> {
        match *event {
            PickerEvent::PointerPressed { surface, position } => {
                log::debug!("picker: started dragging {surface:?}");
                self.drag.start_drag(surface);
                Some(self.apply_pointer(surface, position))
            }
            PickerEvent::PointerMoved { surface, position } => {
                if self.drag.is_dragging(surface) {
                    Some(self.apply_pointer(surface, position))
                } else {
                    None
                }
            }
            PickerEvent::PointerReleased { surface } => {
                if self.drag.is_dragging(surface) {
                    log::debug!("picker: stopped dragging {surface:?}");
                    self.drag.stop_drag(surface);
                }
                None
            }
        }
    }

    /// Restore the default color and return both surfaces to idle.
    pub fn reset(&mut self) -> Snapshot {
        self.hsv = DEFAULT_HSV;
        self.rgb = hsv_to_rgb(DEFAULT_HSV);
        self.drag = SurfaceDragState::default();
        self.snapshot()
    }

    /// Pure read of the current render snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rgb: self.rgb,
            plane_x: self.hsv.saturation as f32 / 100.0,
            plane_y: 1.0 - self.hsv.value as f32 / 100.0,
            line_t: self.hsv.hue as f32 / 360.0,
        }
    }

    fn apply_pointer(&mut self, surface: Surface, position: (f32, f32)) -> Snapshot {
        match surface {
            Surface::Plane => self.update_from_plane_pointer(position.0, position.1),
            Surface::Line => self.update_from_line_pointer(position.1),
        }
    }
}

/// Parse a single numeric field, clamping into [0, 255].
///
/// Returns `None` for unparseable input so the caller can keep the previous
/// channel value.
fn parse_channel(text: &str) -> Option<u8> {
    let value: i64 = text.trim().parse().ok()?;
    Some(value.clamp(0, 255) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Picker with a 150x150 plane, matching the smaller layout variant.
    fn picker_150() -> ColorPicker {
        ColorPicker::new(PickerConfig {
            plane_size: 150.0,
            line_length: 150.0,
        })
        .expect("valid test config")
    }

    /// Drive the default picker to hue 200, saturation 50, value 50 through
    /// its public pointer paths.
    fn teal_picker() -> ColorPicker {
        let mut picker = ColorPicker::default();
        // 200 degrees on a 200px line: 200/360 * 200px.
        picker.update_from_line_pointer(200.0 / 360.0 * 200.0);
        picker.update_from_plane_pointer(100.0, 100.0);
        assert_eq!(picker.hsv(), Hsv::new(200, 50, 50));
        picker
    }

    #[test]
    fn test_default_snapshot_is_pure_red() {
        let snapshot = ColorPicker::default().snapshot();
        assert_eq!(snapshot.rgb, Rgb::new(255, 0, 0));
        assert_eq!(snapshot.plane_x, 1.0);
        assert_eq!(snapshot.plane_y, 0.0);
        assert_eq!(snapshot.line_t, 0.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = ColorPicker::new(PickerConfig {
            plane_size: 0.0,
            line_length: 200.0,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_plane_pointer_clamps_out_of_bounds() {
        let mut wild = picker_150();
        let mut tame = picker_150();

        let clamped = wild.update_from_plane_pointer(-50.0, 9999.0);
        let corner = tame.update_from_plane_pointer(0.0, 150.0);

        assert_eq!(clamped, corner);
        assert_eq!(wild.hsv().saturation, 0);
        assert_eq!(wild.hsv().value, 0);
    }

    #[test]
    fn test_full_length_line_pointer_wraps_to_zero() {
        let mut picker = ColorPicker::default();
        let snapshot = picker.update_from_line_pointer(200.0);
        assert_eq!(picker.hsv().hue, 0);
        assert_eq!(snapshot.line_t, 0.0);
        assert_eq!(snapshot.rgb, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_plane_pointer_does_not_touch_hue() {
        let mut picker = teal_picker();
        picker.update_from_plane_pointer(30.0, 170.0);
        assert_eq!(picker.hsv().hue, 200);
    }

    #[test]
    fn test_grayscale_fields_retain_hue() {
        let mut picker = teal_picker();

        let snapshot = picker.update_from_rgb_fields("128", "128", "128");
        assert_eq!(snapshot.rgb, Rgb::new(128, 128, 128));
        assert_eq!(picker.hsv().hue, 200);
        assert_eq!(picker.hsv().saturation, 0);

        // Raising saturation again restores the retained hue, not red.
        let snapshot = picker.update_from_plane_pointer(200.0, 0.0);
        assert_eq!(picker.hsv().hue, 200);
        assert_eq!(snapshot.rgb, Rgb::new(0, 170, 255));
    }

    #[test]
    fn test_rgb_fields_parse_independently() {
        let mut picker = ColorPicker::default();
        picker.update_from_rgb_fields("10", "20", "30");

        let snapshot = picker.update_from_rgb_fields("abc", "200", "300");
        assert_eq!(snapshot.rgb, Rgb::new(10, 200, 255));
    }

    #[test]
    fn test_negative_field_clamps_to_zero() {
        let mut picker = ColorPicker::default();
        let snapshot = picker.update_from_rgb_fields("-5", "0", "0");
        assert_eq!(snapshot.rgb.r, 0);
    }

    #[test]
    fn test_unchanged_fields_skip_hsv_recomputation() {
        let mut picker = teal_picker();
        let rgb = picker.current_rgb();

        // Echoing the current triple back must not run the lossy round trip;
        // a recomputation here would nudge hue from 200 to 201.
        picker.update_from_rgb_fields(
            &rgb.r.to_string(),
            &rgb.g.to_string(),
            &rgb.b.to_string(),
        );
        assert_eq!(picker.hsv(), Hsv::new(200, 50, 50));
    }

    #[test]
    fn test_moves_are_ignored_while_idle() {
        let mut picker = teal_picker();
        let result = picker.handle_event(&PickerEvent::PointerMoved {
            surface: Surface::Plane,
            position: (0.0, 0.0),
        });
        assert_eq!(result, None);
        assert_eq!(picker.hsv(), Hsv::new(200, 50, 50));
    }

    #[test]
    fn test_press_updates_immediately_and_starts_drag() {
        let mut picker = ColorPicker::default();
        let snapshot = picker.handle_event(&PickerEvent::PointerPressed {
            surface: Surface::Plane,
            position: (100.0, 100.0),
        });

        assert!(picker.is_dragging(Surface::Plane));
        assert_eq!(picker.hsv().saturation, 50);
        assert_eq!(picker.hsv().value, 50);
        assert!(snapshot.is_some());
    }

    #[test]
    fn test_release_ends_drag_without_mutation() {
        let mut picker = ColorPicker::default();
        picker.handle_event(&PickerEvent::PointerPressed {
            surface: Surface::Line,
            position: (0.0, 100.0),
        });
        let hue = picker.hsv().hue;

        let result = picker.handle_event(&PickerEvent::PointerReleased {
            surface: Surface::Line,
        });
        assert_eq!(result, None);
        assert_eq!(picker.hsv().hue, hue);
        assert!(!picker.is_dragging(Surface::Line));

        // A synthetic second release is harmless.
        let result = picker.handle_event(&PickerEvent::PointerReleased {
            surface: Surface::Line,
        });
        assert_eq!(result, None);
    }

    #[test]
    fn test_surface_drags_do_not_cross() {
        let mut picker = teal_picker();
        picker.handle_event(&PickerEvent::PointerPressed {
            surface: Surface::Plane,
            position: (200.0, 0.0),
        });

        // With only the plane dragging, line moves are dropped and hue is
        // untouched by the plane updates.
        let result = picker.handle_event(&PickerEvent::PointerMoved {
            surface: Surface::Line,
            position: (0.0, 0.0),
        });
        assert_eq!(result, None);
        assert_eq!(picker.hsv().hue, 200);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut picker = teal_picker();
        picker.handle_event(&PickerEvent::PointerPressed {
            surface: Surface::Line,
            position: (0.0, 50.0),
        });

        let snapshot = picker.reset();
        assert_eq!(snapshot, ColorPicker::default().snapshot());
        assert!(!picker.is_dragging(Surface::Plane));
        assert!(!picker.is_dragging(Surface::Line));
    }
}
