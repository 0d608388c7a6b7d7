//! Color conversion between HSV and RGB.
//!
//! This module provides the pure, stateless conversion functions used by the
//! picker controller. Both directions work in integer picker units (hue in
//! degrees, saturation/value in percent, RGB channels 0-255) and are total:
//! no input produces an error or a panic.

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An HSV color: hue in degrees [0, 360), saturation and value in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

impl Hsv {
    /// Create an HSV color from hue, saturation, and value.
    pub const fn new(hue: u16, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// HSV components derived from an RGB color.
///
/// Hue is undefined for achromatic input (chroma 0): [`rgb_to_hsv`] reports
/// that case as `hue: None` instead of fabricating a value, and the caller
/// decides which hue to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialHsv {
    /// Derived hue, absent when the input is grayscale
    pub hue: Option<u16>,
    pub saturation: u8,
    pub value: u8,
}

impl PartialHsv {
    /// Resolve the derived components into a full HSV color, falling back to
    /// a previously known hue when the conversion could not produce one.
    pub fn with_hue_fallback(self, prev_hue: u16) -> Hsv {
        Hsv {
            hue: self.hue.unwrap_or(prev_hue),
            saturation: self.saturation,
            value: self.value,
        }
    }
}

/// Convert HSV to RGB.
///
/// Each channel is one clamped ramp over the hue wheel, phase-offset by 120
/// degrees from the others, so no branching on the hue sextant is needed.
/// Channels are rounded to the nearest integer in [0, 255].
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.hue as f32;
    let s = hsv.saturation as f32 / 100.0;
    let v = hsv.value as f32 / 100.0;

    let channel = |phase: f32| -> u8 {
        let k = (phase + h / 60.0) % 6.0;
        let n = v - v * s * k.min(4.0 - k).min(1.0).max(0.0);
        (n * 255.0).round() as u8
    };

    Rgb {
        r: channel(5.0),
        g: channel(3.0),
        b: channel(1.0),
    }
}

/// Convert RGB to HSV components.
///
/// Chroma and the max-channel split are computed on the integer channels, so
/// the grayscale test is exact. When chroma is zero the returned hue is
/// `None`; see [`PartialHsv::with_hue_fallback`].
pub fn rgb_to_hsv(rgb: Rgb) -> PartialHsv {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let chroma = max - min;

    let hue = if chroma == 0 {
        None
    } else {
        let c = chroma as f32;
        // Position within the hue sextant, relative to the strongest channel.
        let h6 = if max == rgb.r {
            (rgb.g as f32 - rgb.b as f32) / c
        } else if max == rgb.g {
            2.0 + (rgb.b as f32 - rgb.r as f32) / c
        } else {
            4.0 + (rgb.r as f32 - rgb.g as f32) / c
        };
        let h6 = if h6 < 0.0 { h6 + 6.0 } else { h6 };
        Some(((60.0 * h6).round() as u16) % 360)
    };

    let saturation = if max == 0 {
        0
    } else {
        (chroma as f32 / max as f32 * 100.0).round() as u8
    };
    let value = (max as f32 / 255.0 * 100.0).round() as u8;

    PartialHsv {
        hue,
        saturation,
        value,
    }
}
