//! Committed switch value and the goal of an in-flight transition.

use serde::{Deserialize, Serialize};

/// The authoritative on/off value.
///
/// `goal` is only meaningful while a transition runs; between transitions
/// it always equals `on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    on: bool,
    goal: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ControlState {
    /// Create an idle state.
    #[must_use]
    pub const fn new(on: bool) -> Self {
        Self { on, goal: on }
    }

    /// Committed value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Value the running transition drives toward.
    #[must_use]
    pub const fn goal(&self) -> bool {
        self.goal
    }

    /// Whether a transition toward the other value is pending.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.on != self.goal
    }

    /// Record the goal of a starting transition.
    pub fn begin(&mut self, goal: bool) {
        self.goal = goal;
    }

    /// Finish a transition. Returns whether the committed value changed.
    pub fn commit(&mut self, on: bool) -> bool {
        let changed = self.on != on;
        self.on = on;
        self.goal = on;
        changed
    }

    /// Abandon a transition, keeping the committed value.
    pub fn abandon(&mut self) {
        self.goal = self.on;
    }

    /// Overwrite the committed value from an interrupted transition's
    /// visual position and end that transition.
    pub fn correct(&mut self, on: bool) {
        self.on = on;
        self.goal = on;
    }
}
