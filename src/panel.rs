//! Control-panel state and outbound settings payloads.
//!
//! The panel mirrors the host control surface: an on/off switch, two slider
//! groups, and a row of mutually exclusive preset tabs. Each user action
//! produces a [`Payload`] ready to be serialized as the JSON body of the
//! settings POST; transmitting it (and surfacing success or failure to the
//! user) is the host's job.

use serde::Serialize;

use crate::picker::ColorPicker;

/// Wire name of the temperature/brightness mode.
const MODE_TEMPERATURE: &str = "mode1";
/// Wire name of the explicit-color mode.
const MODE_COLOR: &str = "mode2";

/// A settings payload bound for the remote endpoint.
///
/// Serializes to exactly the JSON object the endpoint expects for each
/// action, with no enclosing tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Bare on/off switch change
    Power { on: bool },
    /// Temperature mode: color temperature plus brightness
    Temperature {
        mode: String,
        temperature: u8,
        brightness: u8,
        on: bool,
    },
    /// Color mode: the picker's RGB triple plus brightness
    Color {
        mode: String,
        r: u8,
        g: u8,
        b: u8,
        brightness: u8,
        on: bool,
    },
    /// Named preset activation
    Preset { mode: String },
}

/// State of the settings control panel.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    on: bool,
    temperature: u8,
    brightness: u8,
    color_brightness: u8,
    active_preset: Option<String>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            on: true,
            temperature: 50,
            brightness: 50,
            color_brightness: 50,
            active_preset: None,
        }
    }
}

impl ControlPanel {
    /// Create a panel with default settings (powered on, sliders mid-range).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel reports the light as on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// The currently active preset, if any.
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Set the on/off switch and build the corresponding payload.
    pub fn set_power(&mut self, on: bool) -> Payload {
        self.on = on;
        let payload = Payload::Power { on };
        log::debug!("panel: built payload {payload:?}");
        payload
    }

    /// Set the color temperature slider, clamped to [0, 100].
    pub fn set_temperature(&mut self, value: u8) {
        self.temperature = value.min(100);
    }

    /// Set the temperature-mode brightness slider, clamped to [0, 100].
    pub fn set_brightness(&mut self, value: u8) {
        self.brightness = value.min(100);
    }

    /// Set the color-mode brightness slider, clamped to [0, 100].
    pub fn set_color_brightness(&mut self, value: u8) {
        self.color_brightness = value.min(100);
    }

    /// Build the temperature-mode payload from the current slider values.
    ///
    /// Sending a mode deactivates any active preset.
    pub fn send_temperature(&mut self) -> Payload {
        self.active_preset = None;
        let payload = Payload::Temperature {
            mode: MODE_TEMPERATURE.to_string(),
            temperature: self.temperature,
            brightness: self.brightness,
            on: self.on,
        };
        log::debug!("panel: built payload {payload:?}");
        payload
    }

    /// Build the color-mode payload from the picker's current RGB triple and
    /// the color-mode brightness slider.
    ///
    /// Sending a mode deactivates any active preset.
    pub fn send_color(&mut self, picker: &ColorPicker) -> Payload {
        self.active_preset = None;
        let rgb = picker.current_rgb();
        let payload = Payload::Color {
            mode: MODE_COLOR.to_string(),
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            brightness: self.color_brightness,
            on: self.on,
        };
        log::debug!("panel: built payload {payload:?}");
        payload
    }

    /// Toggle a preset tab.
    ///
    /// Activating a preset deactivates the others and returns its payload.
    /// Clicking the already active preset deactivates it and sends nothing.
    pub fn toggle_preset(&mut self, mode: &str) -> Option<Payload> {
        if self.active_preset.as_deref() == Some(mode) {
            self.active_preset = None;
            return None;
        }
        self.active_preset = Some(mode.to_string());
        let payload = Payload::Preset {
            mode: mode.to_string(),
        };
        log::debug!("panel: built payload {payload:?}");
        Some(payload)
    }
}
