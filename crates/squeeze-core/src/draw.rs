//! Draw commands produced by painting.
//!
//! All rendering reduces to these primitives.

use crate::path::Path;
use crate::{Color, CornerRadius, Rect};
use serde::{Deserialize, Serialize};

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Fill color
        color: Color,
    },

    /// Fill a path with the non-zero winding rule
    Fill {
        /// Path to fill
        path: Path,
        /// Fill color
        color: Color,
    },

    /// Draw a named image asset
    Image {
        /// Asset name
        name: String,
        /// Destination bounds
        bounds: Rect,
    },

    /// Restrict subsequent commands to the inside of a path
    PushClip {
        /// Clip path
        path: Path,
    },

    /// Remove the most recent clip
    PopClip,
}

impl DrawCommand {
    /// Create a rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: CornerRadius, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius,
            color,
        }
    }

    /// Create a path fill.
    #[must_use]
    pub fn fill(path: Path, color: Color) -> Self {
        Self::Fill { path, color }
    }
}
