//! Switch configuration as data.
//!
//! [`SwitchConfig`] captures every tunable of the switch so it can be loaded
//! from TOML or JSON. Every field has a default, so partial documents are
//! accepted:
//!
//! ```toml
//! on = false
//! on_color = "#26c282"
//!
//! [motion]
//! bounce_damping = 0.3
//!
//! [membrane]
//! edge_nudge = 3.0
//! ```

use crate::error::ConfigError;
use crate::membrane::MembraneTuning;
use serde::{Deserialize, Serialize};
use squeeze_core::{Color, Easing};

/// Default pointer travel before a press becomes a drag.
pub const DEFAULT_PAN_SLOP: f32 = 4.0;

/// Timing of the two animation phases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Seconds the knob takes to reach the center on a tap
    pub move_duration: f64,
    /// Easing of the move to the center
    pub move_easing: Easing,
    /// Seconds the spring bounce lasts
    pub bounce_duration: f64,
    /// Damping ratio of the spring bounce, in (0, 1]
    pub bounce_damping: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_duration: 0.3,
            move_easing: Easing::EaseInOut,
            bounce_duration: 1.0,
            bounce_damping: 0.2,
        }
    }
}

impl MotionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.move_duration.is_finite() && self.move_duration >= 0.0) {
            return Err(invalid(
                "motion.move_duration",
                format!("must be >= 0, got {}", self.move_duration),
            ));
        }
        if !(self.bounce_duration.is_finite() && self.bounce_duration >= 0.0) {
            return Err(invalid(
                "motion.bounce_duration",
                format!("must be >= 0, got {}", self.bounce_duration),
            ));
        }
        if !(self.bounce_damping > 0.0 && self.bounce_damping <= 1.0) {
            return Err(invalid(
                "motion.bounce_damping",
                format!("must be in (0, 1], got {}", self.bounce_damping),
            ));
        }
        Ok(())
    }
}

/// Resolved colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Membrane fill toward the on state
    pub on: Color,
    /// Membrane fill toward the off state
    pub off: Color,
    /// Track background
    pub track: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            on: Color::rgb(0.15, 0.76, 0.51),
            off: Color::rgb(0.89, 0.27, 0.25),
            track: Color::rgb(0.81, 0.88, 0.94),
        }
    }
}

impl Palette {
    /// Fill color for a membrane headed to `on`.
    #[must_use]
    pub const fn fill(&self, on: bool) -> Color {
        if on {
            self.on
        } else {
            self.off
        }
    }
}

/// Complete switch configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Initial value
    pub on: bool,
    /// Hex color of the on side
    pub on_color: String,
    /// Hex color of the off side
    pub off_color: String,
    /// Hex color of the track background
    pub track_color: String,
    /// Knob image shown when on
    pub on_image: String,
    /// Knob image shown when off
    pub off_image: String,
    /// Pointer travel before a press becomes a drag
    pub pan_slop: f32,
    /// Animation timing
    pub motion: MotionConfig,
    /// Membrane shape
    pub membrane: MembraneTuning,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            on: true,
            on_color: palette.on.to_hex(),
            off_color: palette.off.to_hex(),
            track_color: palette.track.to_hex(),
            on_image: "Circle_Ok".into(),
            off_image: "Circle_No".into(),
            pan_slop: DEFAULT_PAN_SLOP,
            motion: MotionConfig::default(),
            membrane: MembraneTuning::default(),
        }
    }
}

impl SwitchConfig {
    /// Load and validate from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or fails
    /// [`Self::validate`].
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or fails
    /// [`Self::validate`].
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Parse the hex colors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Color`] naming the first malformed field.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let parse = |field: &'static str, hex: &str| {
            Color::from_hex(hex).map_err(|source| ConfigError::Color { field, source })
        };
        Ok(Palette {
            on: parse("on_color", &self.on_color)?,
            off: parse("off_color", &self.off_color)?,
            track: parse("track_color", &self.track_color)?,
        })
    }

    /// Check every field is within range.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette()?;
        if self.on_image.is_empty() {
            return Err(invalid("on_image", "must not be empty".into()));
        }
        if self.off_image.is_empty() {
            return Err(invalid("off_image", "must not be empty".into()));
        }
        self.motion.validate()?;

        let m = &self.membrane;
        if !(m.clamp_factor.is_finite() && m.clamp_factor >= 0.0) {
            return Err(invalid("membrane.clamp_factor", format!("must be >= 0, got {}", m.clamp_factor)));
        }
        if !m.edge_nudge.is_finite() {
            return Err(invalid("membrane.edge_nudge", format!("must be finite, got {}", m.edge_nudge)));
        }
        if !(m.neck_bias.is_finite() && m.neck_bias >= 0.0) {
            return Err(invalid("membrane.neck_bias", format!("must be >= 0, got {}", m.neck_bias)));
        }
        if !(self.pan_slop.is_finite() && self.pan_slop >= 0.0) {
            return Err(invalid("pan_slop", format!("must be >= 0, got {}", self.pan_slop)));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
