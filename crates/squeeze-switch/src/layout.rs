//! Fixed geometry derived from the switch's bounds.
//!
//! Every x-coordinate is local to the switch (0 is its left edge). The knob
//! rests at [`LayoutConstants::on_x`] when on and
//! [`LayoutConstants::off_x`] when off; the two mid positions are the
//! overshoot targets of the first animation phase and the drag limits.

use serde::{Deserialize, Serialize};
use squeeze_core::{CornerRadius, Path, Point, Rect, Size};

/// Knob diameter as a fraction of the knob extent.
const KNOB_SCALE: f32 = 0.7;
/// Center gap width as a fraction of the track width.
const GAP_SCALE: f32 = 0.1;
/// Narrowest width-to-height ratio at which the knob keeps its full size.
///
/// `on_x < min_mid_x` needs `3 * image_offset + 2 * image_size < width`,
/// i.e. `width > 1.85 * height` at full size; a small margin keeps the
/// inequality strict.
const MIN_ASPECT: f32 = 1.9;

/// Geometry constants for one set of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutConstants {
    /// Track width
    pub width: f32,
    /// Track height
    pub height: f32,
    /// Knob diameter
    pub image_size: f32,
    /// Margin between knob and track edge
    pub image_offset: f32,
    /// Width of the gap at the track's center
    pub middle_offset: f32,
    /// Resting knob-center x when on
    pub on_x: f32,
    /// Resting knob-center x when off
    pub off_x: f32,
    /// Overshoot target when turning on, and the lower drag limit when off
    pub min_mid_x: f32,
    /// Overshoot target when turning off, and the upper drag limit when on
    pub max_mid_x: f32,
}

impl LayoutConstants {
    /// Derive the constants for a track of `size`.
    ///
    /// Empty sizes yield an all-zero, degenerate layout.
    #[must_use]
    pub fn from_bounds(size: Size) -> Self {
        if size.is_empty() {
            return Self::default();
        }
        let (width, height) = (size.width, size.height);

        // Tracks at or below MIN_ASPECT shrink the knob so it still has
        // room to travel past both overshoot points.
        let extent = height.min(width / MIN_ASPECT);
        let image_size = KNOB_SCALE * extent;
        let image_offset = (extent - image_size) / 2.0;

        Self {
            width,
            height,
            image_size,
            image_offset,
            middle_offset: GAP_SCALE * width,
            on_x: image_offset + image_size / 2.0,
            off_x: width - image_offset - image_size / 2.0,
            min_mid_x: (width - image_offset - image_size) / 2.0,
            max_mid_x: (width + image_offset + image_size) / 2.0,
        }
    }

    /// Whether the bounds had no area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Horizontal centerline.
    #[must_use]
    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub fn mid_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Knob-center x when docked in state `on`.
    #[must_use]
    pub const fn resting_x(&self, on: bool) -> f32 {
        if on {
            self.on_x
        } else {
            self.off_x
        }
    }

    /// Intermediate target of a move toward `goal`, just past the center.
    #[must_use]
    pub const fn overshoot_x(&self, goal: bool) -> f32 {
        if goal {
            self.min_mid_x
        } else {
            self.max_mid_x
        }
    }

    /// Legal knob-center range while dragging from state `on`.
    ///
    /// The knob can only be pulled toward the opposite side, and no further
    /// than that side's overshoot point.
    #[must_use]
    pub const fn drag_range(&self, on: bool) -> (f32, f32) {
        if on {
            (self.on_x, self.max_mid_x)
        } else {
            (self.min_mid_x, self.off_x)
        }
    }

    /// Clamp a pointer x into [`Self::drag_range`].
    #[must_use]
    pub fn clamp_drag(&self, x: f32, on: bool) -> f32 {
        let (min, max) = self.drag_range(on);
        x.clamp(min, max)
    }

    /// State a knob released at `x` settles into. The centerline itself
    /// counts as off.
    #[must_use]
    pub fn release_goal(&self, x: f32) -> bool {
        x < self.mid_x()
    }

    /// Square the knob image occupies when centered at `center_x`.
    #[must_use]
    pub fn knob_rect(&self, center_x: f32) -> Rect {
        Rect::centered_square(Point::new(center_x, self.mid_y()), self.image_size)
    }

    /// The two rounded halves of the track, left of and right of the gap.
    #[must_use]
    pub fn track_halves(&self) -> (Rect, Rect) {
        let half = ((self.width - self.middle_offset) / 2.0).max(0.0);
        (
            Rect::new(0.0, 0.0, half, self.height),
            Rect::new(self.width - half, 0.0, half, self.height),
        )
    }

    /// Clip mask for everything drawn inside the track.
    #[must_use]
    pub fn track_mask(&self) -> Path {
        let radius = self.height / 2.0;
        let (left, right) = self.track_halves();
        let mut mask = Path::rounded_rect(left, CornerRadius::left(radius));
        mask.append(&Path::rounded_rect(right, CornerRadius::right(radius)));
        mask
    }
}
