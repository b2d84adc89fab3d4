//! Explicit configuration for the controller and for `draw_image`.
//!
//! Both structs deserialize with per-field defaults, so a host may pass a
//! partial JSON object. [`ControllerConfig::validated`] is the single place
//! where values are checked; a controller never sees an unchecked config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ACTIVE_BORDER_COLOR, DEFAULT_ACTIVE_BORDER_WIDTH, DEFAULT_SIZE_RATIO, POINTER_MOVE_DEBOUNCE_MS,
    RESIZE_DEBOUNCE_MS,
};
use crate::error::CanvasError;

/// Controller-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Decoration width around the active item, in pixels. Default `2`.
    pub active_item_border_width: f64,
    /// Fill colour of the decoration. Default `"green"`.
    pub active_border_color: String,
    /// Resize quiet period in milliseconds. Default `100`.
    pub resize_debounce_ms: f64,
    /// Pointer-move quiet period in milliseconds. Default `10`.
    pub pointer_move_debounce_ms: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            active_item_border_width: DEFAULT_ACTIVE_BORDER_WIDTH,
            active_border_color: DEFAULT_ACTIVE_BORDER_COLOR.to_owned(),
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            pointer_move_debounce_ms: POINTER_MOVE_DEBOUNCE_MS,
        }
    }
}

impl ControllerConfig {
    /// Defaults with a custom active border width.
    #[must_use]
    pub fn with_border_width(active_item_border_width: f64) -> Self {
        Self { active_item_border_width, ..Self::default() }
    }

    /// Parse a (possibly partial) JSON object and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Json`] for malformed JSON and
    /// [`CanvasError::Config`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Check every field once.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] if the border width is negative or not
    /// finite, or a debounce window is not a positive finite number.
    pub fn validated(self) -> Result<Self, CanvasError> {
        if !self.active_item_border_width.is_finite() || self.active_item_border_width < 0.0 {
            return Err(CanvasError::Config(format!(
                "active_item_border_width must be a non-negative number, got {}",
                self.active_item_border_width
            )));
        }
        for (name, value) in [
            ("resize_debounce_ms", self.resize_debounce_ms),
            ("pointer_move_debounce_ms", self.pointer_move_debounce_ms),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CanvasError::Config(format!("{name} must be a positive number, got {value}")));
            }
        }
        Ok(self)
    }
}

/// Placement options for [`crate::controller::Controller::draw_image`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawImageOptions {
    /// Left edge. Default `0`.
    pub x: f64,
    /// Top edge. Default `0`.
    pub y: f64,
    /// Explicit width; used only together with a non-zero `h`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    /// Explicit height; used only together with a non-zero `w`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    /// Uniform scale applied after the contain fit. Default `1`.
    pub size_ratio: f64,
}

impl Default for DrawImageOptions {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, w: None, h: None, size_ratio: DEFAULT_SIZE_RATIO }
    }
}

impl DrawImageOptions {
    /// Explicit `(w, h)` if both are present and non-zero.
    #[must_use]
    pub fn explicit_size(&self) -> Option<(f64, f64)> {
        match (self.w, self.h) {
            (Some(w), Some(h)) if w != 0.0 && h != 0.0 => Some((w, h)),
            _ => None,
        }
    }
}
