//! Widget and canvas traits.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self within allocated bounds
//! 3. **Paint**: Generate draw commands for rendering
//!
//! Animated widgets additionally receive [`Widget::tick`] once per display
//! frame from the host.
//!
//! # Examples
//!
//! ```
//! use squeeze_core::TypeId;
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{CornerRadius, Rect, Size};
use crate::path::Path;
use crate::Color;
use std::any::Any;

/// Type identifier for widget types (used for diffing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events. Returns a message when the widget's value changed.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Advance animations by `dt` seconds. Returns a message when an
    /// animation committed a value change.
    fn tick(&mut self, _dt: f64) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Whether the widget still needs frames.
    fn is_animating(&self) -> bool {
        false
    }

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle, optionally with rounded corners.
    fn fill_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color);

    /// Fill the inside of a path.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Draw a named image into the destination rectangle.
    fn draw_image(&mut self, name: &str, bounds: Rect);

    /// Push a clip path; subsequent drawing is masked to its inside.
    fn push_clip_path(&mut self, path: &Path);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_distinguishes_types() {
        assert_eq!(TypeId::of::<u8>(), TypeId::of::<u8>());
        assert_ne!(TypeId::of::<u8>(), TypeId::of::<u16>());
    }

    #[test]
    fn test_layout_result_default() {
        let r = LayoutResult::default();
        assert_eq!(r.size, Size::ZERO);
    }
}
