//! Everything the switch displays, plus the committed state behind it.

use crate::layout::LayoutConstants;
use crate::membrane::{BounceFrame, Membrane, MembraneGenerator};
use crate::state::ControlState;
use tracing::debug;

/// Knob position, knob face and membrane, kept consistent with
/// [`ControlState`].
///
/// Between transitions the scene is docked: the knob rests at
/// `resting_x(on)`, shows the face of `on`, and the membrane is flat.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    generator: MembraneGenerator,
    state: ControlState,
    knob_x: f32,
    face_on: bool,
    membrane: Membrane,
}

impl Scene {
    /// A docked scene in state `on`.
    #[must_use]
    pub fn new(generator: MembraneGenerator, on: bool) -> Self {
        Self {
            state: ControlState::new(on),
            knob_x: generator.layout().resting_x(on),
            face_on: on,
            membrane: Membrane::flat(&generator, on),
            generator,
        }
    }

    /// Geometry in effect.
    #[must_use]
    pub const fn layout(&self) -> &LayoutConstants {
        self.generator.layout()
    }

    /// Path generator for the current geometry.
    #[must_use]
    pub const fn generator(&self) -> &MembraneGenerator {
        &self.generator
    }

    /// Committed state.
    #[must_use]
    pub const fn state(&self) -> &ControlState {
        &self.state
    }

    /// Committed value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Live knob-center x.
    #[must_use]
    pub const fn knob_x(&self) -> f32 {
        self.knob_x
    }

    /// Whether the knob shows the on image.
    #[must_use]
    pub const fn face_on(&self) -> bool {
        self.face_on
    }

    /// Membrane as displayed.
    #[must_use]
    pub const fn membrane(&self) -> &Membrane {
        &self.membrane
    }

    /// Whether the visuals match a docked knob for the committed value.
    #[must_use]
    pub fn is_docked(&self) -> bool {
        let on = self.state.is_on();
        !self.state.is_transitioning()
            && self.face_on == on
            && self.knob_x == self.layout().resting_x(on)
            && *self.membrane.path() == self.generator.degenerate_path(on)
    }

    /// Swap in new geometry and dock at the committed value.
    pub fn relayout(&mut self, generator: MembraneGenerator) {
        self.generator = generator;
        self.snap(self.state.is_on());
    }

    /// Jump to a docked state without animating.
    pub fn snap(&mut self, on: bool) {
        self.state.correct(on);
        self.dock();
    }

    /// Finish a transition at `on`. Returns whether the value changed.
    pub fn commit(&mut self, on: bool) -> bool {
        let changed = self.state.commit(on);
        self.dock();
        debug!(on, changed, "transition committed");
        changed
    }

    fn dock(&mut self) {
        let on = self.state.is_on();
        self.knob_x = self.layout().resting_x(on);
        self.face_on = on;
        self.membrane.update(self.generator.degenerate_path(on), on);
    }

    /// Record the goal of a starting transition.
    pub fn begin(&mut self, goal: bool) {
        self.state.begin(goal);
    }

    /// Re-derive the committed value from where an interrupted transition
    /// left the knob: left of the centerline is on. Returns whether the
    /// value changed.
    pub fn correct_from_live(&mut self) -> bool {
        if self.layout().is_degenerate() {
            self.state.abandon();
            return false;
        }
        let on = self.knob_x < self.layout().mid_x();
        let changed = on != self.state.is_on();
        if changed {
            debug!(knob_x = self.knob_x, on, "state corrected from knob position");
        }
        self.state.correct(on);
        changed
    }

    /// Move the knob.
    pub fn set_knob_x(&mut self, x: f32) {
        self.knob_x = x;
    }

    /// Change the knob image.
    pub fn set_face(&mut self, on: bool) {
        self.face_on = on;
    }

    /// Change the membrane fill.
    pub fn set_fill(&mut self, fill_on: bool) {
        self.membrane.set_fill(fill_on);
    }

    /// Membrane trailing the knob as it leaves the committed state.
    pub fn stretch_to_knob(&mut self) {
        let path = self
            .generator
            .membrane_path_for_knob_edge(self.knob_x, self.state.is_on());
        self.membrane.set_path(path);
    }

    /// Collapse the membrane onto the committed side.
    pub fn flatten_membrane(&mut self) {
        let path = self.generator.degenerate_path(self.state.is_on());
        self.membrane.set_path(path);
    }

    /// Draw one bounce frame toward `goal`.
    pub fn show_bounce(&mut self, goal: bool, max_offset: f32) {
        match self.generator.bounce_frame(self.knob_x, goal, max_offset) {
            BounceFrame::Curve { path, fill_on, .. } => self.membrane.update(path, fill_on),
            BounceFrame::Degenerate => self.flatten_membrane(),
        }
    }
}
