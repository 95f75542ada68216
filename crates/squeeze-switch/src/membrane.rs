//! Membrane path generation.
//!
//! The membrane is the curved neck of track material that stretches behind
//! the knob as it crosses the center gap. Its outline is a closed lens: two
//! quadratic curves from an anchor on the near side of the gap out to the
//! knob and back. When the knob is docked the lens collapses to a vertical
//! line on the anchor, which fills nothing.
//!
//! Every function here is pure in `(x, on, LayoutConstants, MembraneTuning)`.

use crate::layout::LayoutConstants;
use serde::{Deserialize, Serialize};
use squeeze_core::{Path, Point};

/// Offsets at or below this are treated as "already settled".
pub const SETTLED_EPSILON: f32 = 1e-3;

/// Shape tuning for the membrane curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembraneTuning {
    /// How many knob diameters past the gap the control points may travel
    pub clamp_factor: f32,
    /// Push applied to the knob's leading edge in the direction of travel
    pub edge_nudge: f32,
    /// Minimum vertical spread of the control points
    pub neck_bias: f32,
}

impl Default for MembraneTuning {
    fn default() -> Self {
        Self {
            clamp_factor: 1.0,
            edge_nudge: 2.0,
            neck_bias: 1.0,
        }
    }
}

/// Builds membrane outlines for one layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MembraneGenerator {
    layout: LayoutConstants,
    tuning: MembraneTuning,
}

/// One frame of the spring bounce.
#[derive(Debug, Clone, PartialEq)]
pub enum BounceFrame {
    /// The knob is outside the bounce envelope; draw the flat path.
    Degenerate,
    /// A cosmetic lens standing in for the knob's overshoot.
    Curve {
        /// Outline to fill
        path: Path,
        /// Whether the fill uses the on color
        fill_on: bool,
        /// Position the lens reaches
        cosmetic_x: f32,
    },
}

impl MembraneGenerator {
    /// Create a generator with default tuning.
    #[must_use]
    pub fn new(layout: LayoutConstants) -> Self {
        Self::with_tuning(layout, MembraneTuning::default())
    }

    /// Create a generator with explicit tuning.
    #[must_use]
    pub const fn with_tuning(layout: LayoutConstants, tuning: MembraneTuning) -> Self {
        Self { layout, tuning }
    }

    /// Layout the generator was built for.
    #[must_use]
    pub const fn layout(&self) -> &LayoutConstants {
        &self.layout
    }

    /// Tuning in effect.
    #[must_use]
    pub const fn tuning(&self) -> &MembraneTuning {
        &self.tuning
    }

    /// X of the anchor on the on side (`on`) or off side of the gap.
    fn anchor_x(&self, on: bool) -> f32 {
        let half_gap = self.layout.middle_offset / 2.0;
        if on {
            self.layout.mid_x() + half_gap
        } else {
            self.layout.mid_x() - half_gap
        }
    }

    /// Flat membrane for a knob docked in state `on`.
    #[must_use]
    pub fn degenerate_path(&self, on: bool) -> Path {
        let x = self.anchor_x(on);
        Path::line(Point::new(x, 0.0), Point::new(x, self.layout.height))
    }

    /// Lens whose tip reaches `x`.
    #[must_use]
    pub fn membrane_path(&self, x: f32) -> Path {
        let l = &self.layout;
        if l.is_degenerate() {
            return self.degenerate_path(x < l.mid_x());
        }

        let mid_x = l.mid_x();
        let mid_y = l.mid_y();
        let anchor = self.anchor_x(x >= mid_x);

        let reach = self.tuning.clamp_factor * l.image_size;
        let lo = (l.width - l.middle_offset) / 2.0 - reach;
        let hi = (l.width + l.middle_offset) / 2.0 + reach;
        let ctrl_x = x.clamp(lo, hi);

        let max_legal = l.off_x - mid_x;
        let stretch = if max_legal > 0.0 {
            ((x - mid_x).abs() / max_legal).min(1.0)
        } else {
            0.0
        };
        let dy = stretch.mul_add(l.image_size / 2.0, self.tuning.neck_bias);

        let mut path = Path::new();
        path.move_to(Point::new(anchor, 0.0))
            .quad_to(Point::new(ctrl_x, mid_y - dy), Point::new(x, mid_y))
            .quad_to(Point::new(ctrl_x, mid_y + dy), Point::new(anchor, l.height))
            .close();
        path
    }

    /// Membrane trailing a knob centered at `center_x` that left state `on`.
    ///
    /// Flat until the knob's leading edge reaches the near side of the gap.
    #[must_use]
    pub fn membrane_path_for_knob_edge(&self, center_x: f32, on: bool) -> Path {
        let l = &self.layout;
        if l.is_degenerate() {
            return self.degenerate_path(on);
        }
        let half = l.image_size / 2.0;
        let (max_x, min_x) = (center_x + half, center_x - half);

        if (on && max_x < (l.width - l.middle_offset) / 2.0)
            || (!on && min_x > (l.width + l.middle_offset) / 2.0)
        {
            return self.degenerate_path(on);
        }

        let edge = if on {
            max_x + self.tuning.edge_nudge
        } else {
            min_x - self.tuning.edge_nudge
        };
        self.membrane_path(edge)
    }

    /// Cosmetic bounce frame for a knob at `x_live` springing toward `goal`.
    ///
    /// `max_offset` is the knob's distance from rest when the bounce began.
    #[must_use]
    pub fn bounce_frame(&self, x_live: f32, goal: bool, max_offset: f32) -> BounceFrame {
        if max_offset <= SETTLED_EPSILON || self.layout.is_degenerate() {
            return BounceFrame::Degenerate;
        }
        let l = &self.layout;
        let offset = l.resting_x(goal) - x_live;
        let percent = offset / max_offset;
        if percent.abs() > 1.0 {
            return BounceFrame::Degenerate;
        }

        let half_margin = l.image_offset / 2.0;
        let point = if offset > 0.0 {
            l.mid_x() + half_margin
        } else {
            l.mid_x() - half_margin
        };
        let cosmetic_x = percent.mul_add(l.image_size, point);

        BounceFrame::Curve {
            path: self.membrane_path(cosmetic_x),
            fill_on: cosmetic_x <= l.mid_x(),
            cosmetic_x,
        }
    }
}

/// The membrane as currently displayed.
///
/// `revision` increases on every update so hosts can skip repaints of an
/// unchanged shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Membrane {
    path: Path,
    fill_on: bool,
    revision: u64,
}

impl Membrane {
    /// A flat membrane filled with the color of `on`.
    #[must_use]
    pub fn flat(generator: &MembraneGenerator, on: bool) -> Self {
        Self {
            path: generator.degenerate_path(on),
            fill_on: on,
            revision: 0,
        }
    }

    /// Current outline.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the fill uses the on color.
    #[must_use]
    pub const fn fill_on(&self) -> bool {
        self.fill_on
    }

    /// Update counter.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the outline.
    pub fn set_path(&mut self, path: Path) {
        self.path = path;
        self.revision += 1;
    }

    /// Change the fill color.
    pub fn set_fill(&mut self, fill_on: bool) {
        if self.fill_on != fill_on {
            self.fill_on = fill_on;
            self.revision += 1;
        }
    }

    /// Replace outline and fill together.
    pub fn update(&mut self, path: Path, fill_on: bool) {
        self.fill_on = fill_on;
        self.set_path(path);
    }
}
