//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_exact() {
        let c = Constraints::new(300.0, 300.0, 60.0, 60.0);
        assert_eq!(c.constrain(Size::new(10.0, 10.0)), Size::new(300.0, 60.0));
    }

    #[test]
    fn test_constraints_loose() {
        let c = Constraints::loose(Size::new(100.0, 200.0));
        assert_eq!(c.min_width, 0.0);
        assert_eq!(c.constrain(Size::new(150.0, 50.0)), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_constraints_loose_infinite() {
        let c = Constraints::loose(Size::new(f32::INFINITY, f32::INFINITY));
        assert_eq!(c.constrain(Size::new(1e6, 1e6)), Size::new(1e6, 1e6));
    }
}
