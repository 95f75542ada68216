//! Canvas implementations for rendering.

use crate::draw::DrawCommand;
use crate::path::Path;
use crate::widget::Canvas;
use crate::{Color, CornerRadius, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to a GPU or WASM host)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.clip_depth = 0;
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current clip nesting depth.
    #[must_use]
    pub const fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Path fills in paint order.
    pub fn fills(&self) -> impl Iterator<Item = (&Path, Color)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Fill { path, color } => Some((path, *color)),
            _ => None,
        })
    }

    /// Image draws in paint order.
    pub fn images(&self) -> impl Iterator<Item = (&str, Rect)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Image { name, bounds } => Some((name.as_str(), *bounds)),
            _ => None,
        })
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(DrawCommand::fill(path.clone(), color));
    }

    fn draw_image(&mut self, name: &str, bounds: Rect) {
        self.commands.push(DrawCommand::Image {
            name: name.to_string(),
            bounds,
        });
    }

    fn push_clip_path(&mut self, path: &Path) {
        self.clip_depth += 1;
        self.commands
            .push(DrawCommand::PushClip { path: path.clone() });
    }

    fn pop_clip(&mut self) {
        // unbalanced pops are ignored
        if self.clip_depth > 0 {
            self.clip_depth -= 1;
            self.commands.push(DrawCommand::PopClip);
        }
    }
}
