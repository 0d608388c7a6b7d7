//! Geometry configuration for the picker surfaces.
//!
//! Hosts hand the controller the pixel dimensions of the two interactive
//! elements so raw pointer offsets can be normalized. The config is
//! serde-serializable so hosts can persist or ship it alongside their own
//! settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating a picker configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A surface dimension is zero, negative, or not finite
    #[error("invalid {name} dimension: {value}")]
    InvalidDimension {
        /// Name of the offending field
        name: &'static str,
        /// The rejected value
        value: f32,
    },
}

/// Pixel geometry of the two interactive surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Side length of the square saturation/value plane, in pixels
    pub plane_size: f32,
    /// Length of the hue line, in pixels
    pub line_length: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            plane_size: 200.0,
            line_length: 200.0,
        }
    }
}

impl PickerConfig {
    /// Validate the configured dimensions.
    ///
    /// Pointer offsets are divided by these lengths, so each must be a
    /// finite, strictly positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("plane_size", self.plane_size),
            ("line_length", self.line_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PickerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let zero = PickerConfig {
            plane_size: 0.0,
            ..PickerConfig::default()
        };
        assert!(zero.validate().is_err());

        let negative = PickerConfig {
            line_length: -10.0,
            ..PickerConfig::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_dimensions() {
        let nan = PickerConfig {
            plane_size: f32::NAN,
            ..PickerConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config: PickerConfig =
            serde_json::from_str(r#"{"plane_size": 150.0, "line_length": 150.0}"#)
                .expect("valid config JSON");
        assert_eq!(config.plane_size, 150.0);
        assert!(config.validate().is_ok());
    }
}
