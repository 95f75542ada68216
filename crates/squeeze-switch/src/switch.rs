//! The squeeze switch widget.

use crate::config::{MotionConfig, Palette, SwitchConfig};
use crate::driver::{AnimationDriver, Phase, Transition};
use crate::error::ConfigError;
use crate::gesture::{GestureController, PanEvent, PanRecognizer, Recognized};
use crate::layout::LayoutConstants;
use crate::membrane::{Membrane, MembraneGenerator, MembraneTuning};
use crate::scene::Scene;
use squeeze_core::{
    widget::LayoutResult, Canvas, Color, Constraints, CornerRadius, Event, MotionFactory, Rect,
    Size, TypeId, Widget,
};
use std::any::Any;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};

/// Message emitted when a transition commits a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchToggled {
    /// The new value
    pub on: bool,
}

impl SwitchToggled {
    fn from_transition(t: Transition) -> Option<Self> {
        t.changed.then_some(Self { on: t.on })
    }
}

/// Binary toggle whose knob squeezes through a gap in the track.
///
/// The host drives it like any other [`Widget`]: `layout`, `event`,
/// `paint`, and `tick` once per frame while [`Widget::is_animating`].
#[derive(Debug)]
pub struct SqueezeSwitch {
    palette: Palette,
    on_image: String,
    off_image: String,
    tuning: MembraneTuning,
    preferred_size: Size,
    bounds: Rect,
    scene: Scene,
    driver: AnimationDriver,
    gestures: GestureController,
    recognizer: PanRecognizer,
    pending: VecDeque<SwitchToggled>,
}

impl Default for SqueezeSwitch {
    fn default() -> Self {
        let tuning = MembraneTuning::default();
        Self {
            palette: Palette::default(),
            on_image: "Circle_Ok".into(),
            off_image: "Circle_No".into(),
            tuning,
            preferred_size: Size::new(120.0, 48.0),
            bounds: Rect::default(),
            scene: Scene::new(
                MembraneGenerator::with_tuning(LayoutConstants::default(), tuning),
                true,
            ),
            driver: AnimationDriver::default(),
            gestures: GestureController::new(),
            recognizer: PanRecognizer::default(),
            pending: VecDeque::new(),
        }
    }
}

impl SqueezeSwitch {
    /// Create a switch that starts on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with initial state.
    #[must_use]
    pub fn with_state(on: bool) -> Self {
        Self::default().on(on)
    }

    /// Build a switch from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &SwitchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = config.palette()?;
        Ok(Self::default()
            .on(config.on)
            .on_color(palette.on)
            .off_color(palette.off)
            .track_color(palette.track)
            .on_image(config.on_image.clone())
            .off_image(config.off_image.clone())
            .pan_slop(config.pan_slop)
            .motion(config.motion)
            .membrane(config.membrane))
    }

    /// Set the initial state.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.scene.snap(on);
        self
    }

    /// Set the on-side color.
    #[must_use]
    pub const fn on_color(mut self, color: Color) -> Self {
        self.palette.on = color;
        self
    }

    /// Set the off-side color.
    #[must_use]
    pub const fn off_color(mut self, color: Color) -> Self {
        self.palette.off = color;
        self
    }

    /// Set the track background color.
    #[must_use]
    pub const fn track_color(mut self, color: Color) -> Self {
        self.palette.track = color;
        self
    }

    /// Set the knob image shown when on.
    #[must_use]
    pub fn on_image(mut self, name: impl Into<String>) -> Self {
        self.on_image = name.into();
        self
    }

    /// Set the knob image shown when off.
    #[must_use]
    pub fn off_image(mut self, name: impl Into<String>) -> Self {
        self.off_image = name.into();
        self
    }

    /// Set the pointer travel before a press becomes a drag.
    #[must_use]
    pub fn pan_slop(mut self, slop: f32) -> Self {
        self.recognizer = PanRecognizer::new(slop);
        self
    }

    /// Set animation timing. Out-of-range values are clamped.
    #[must_use]
    pub fn motion(mut self, motion: MotionConfig) -> Self {
        let mut clamped = motion;
        clamped.move_duration = motion.move_duration.max(0.0);
        clamped.bounce_duration = motion.bounce_duration.max(0.0);
        clamped.bounce_damping = motion.bounce_damping.clamp(0.01, 1.0);
        if clamped != motion {
            warn!(?motion, ?clamped, "motion settings clamped");
        }
        self.driver.set_timing(clamped);
        self
    }

    /// Set the membrane shape.
    #[must_use]
    pub fn membrane(mut self, tuning: MembraneTuning) -> Self {
        self.tuning = tuning;
        let generator = MembraneGenerator::with_tuning(*self.scene.layout(), tuning);
        self.scene.relayout(generator);
        self
    }

    /// Use a host animation engine instead of the built-in interpolation.
    #[must_use]
    pub fn motions(mut self, motions: Arc<dyn MotionFactory>) -> Self {
        self.driver.set_motions(motions);
        self
    }

    /// Set the size requested from layout.
    #[must_use]
    pub fn preferred_size(mut self, size: Size) -> Self {
        self.preferred_size = Size::new(size.width.max(0.0), size.height.max(0.0));
        self
    }

    /// Committed value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.scene.is_on()
    }

    /// Whether the pointer holds the knob.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    /// Stage of the running transition, if any.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.driver.phase()
    }

    /// Geometry for the current bounds.
    #[must_use]
    pub const fn layout_constants(&self) -> &LayoutConstants {
        self.scene.layout()
    }

    /// Displayed state.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Displayed membrane.
    #[must_use]
    pub const fn membrane_state(&self) -> &Membrane {
        self.scene.membrane()
    }

    /// Colors in use.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Image the knob shows right now.
    #[must_use]
    pub fn current_image(&self) -> &str {
        if self.scene.face_on() {
            &self.on_image
        } else {
            &self.off_image
        }
    }

    /// Set the value without animating.
    ///
    /// Cancels any running transition or drag and docks the knob.
    pub fn set_on(&mut self, on: bool) {
        self.driver.cancel();
        self.gestures.abandon();
        self.recognizer.reset();
        self.scene.snap(on);
        debug!(on, "value set");
    }

    /// Animate to the opposite value, as a tap does.
    ///
    /// The value is first corrected from where the knob sits. Returns a
    /// message when that correction changed it.
    pub fn toggle_animated(&mut self) -> Option<SwitchToggled> {
        if self.gestures.is_dragging() {
            self.gestures.abandon();
            self.recognizer.reset();
        }
        self.driver
            .start_toggle(&mut self.scene)
            .and_then(SwitchToggled::from_transition)
    }

    /// Apply a pan update with x local to the switch.
    pub fn handle_pan(&mut self, pan: PanEvent) -> Option<SwitchToggled> {
        let transition = self.gestures.handle(pan, &mut self.scene, &mut self.driver)?;
        SwitchToggled::from_transition(transition)
    }

    fn relayout(&mut self, size: Size) {
        let finished = self
            .driver
            .finish(&mut self.scene)
            .and_then(SwitchToggled::from_transition);
        self.pending.extend(finished);
        if self.gestures.is_dragging() {
            self.gestures.abandon();
            self.recognizer.reset();
        }
        let layout = LayoutConstants::from_bounds(size);
        debug!(
            width = size.width,
            height = size.height,
            degenerate = layout.is_degenerate(),
            "layout recomputed"
        );
        self.scene
            .relayout(MembraneGenerator::with_tuning(layout, self.tuning));
    }
}

fn boxed(message: SwitchToggled) -> Box<dyn Any + Send> {
    Box::new(message)
}

impl Widget for SqueezeSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.preferred_size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let size = bounds.size();
        if size != self.bounds.size() {
            self.relayout(size);
        }
        self.bounds = bounds;
        LayoutResult { size }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let layout = self.scene.layout();
        if layout.is_degenerate() {
            return;
        }
        let origin = self.bounds.origin();
        let membrane = self.scene.membrane();

        canvas.push_clip_path(&layout.track_mask().translate(origin));
        canvas.fill_rect(self.bounds, CornerRadius::ZERO, self.palette.track);
        canvas.fill_path(
            &membrane.path().translate(origin),
            self.palette.fill(membrane.fill_on()),
        );
        canvas.draw_image(
            self.current_image(),
            layout.knob_rect(self.scene.knob_x()).translate(origin),
        );
        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let message = match self.recognizer.process(event, self.bounds)? {
            Recognized::Tap => self.toggle_animated(),
            Recognized::Pan(pan) => self.handle_pan(pan),
        };
        message.map(boxed)
    }

    fn tick(&mut self, dt: f64) -> Option<Box<dyn Any + Send>> {
        let fresh = self
            .driver
            .tick(&mut self.scene, dt)
            .and_then(SwitchToggled::from_transition);
        self.pending.extend(fresh);
        self.pending.pop_front().map(boxed)
    }

    fn is_animating(&self) -> bool {
        self.driver.is_active() || !self.pending.is_empty()
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squeeze_core::{DrawCommand, Point, RecordingCanvas};

    const FRAME: f64 = 1.0 / 60.0;

    fn laid_out(on: bool) -> SqueezeSwitch {
        let mut switch = SqueezeSwitch::with_state(on);
        switch.layout(Rect::new(0.0, 0.0, 300.0, 60.0));
        switch
    }

    fn toggled(message: Option<Box<dyn Any + Send>>) -> Option<SwitchToggled> {
        message.and_then(|m| m.downcast_ref::<SwitchToggled>().copied())
    }

    fn run(switch: &mut SqueezeSwitch) -> Option<SwitchToggled> {
        let mut last = None;
        for _ in 0..600 {
            if !switch.is_animating() {
                break;
            }
            if let Some(m) = toggled(switch.tick(FRAME)) {
                last = Some(m);
            }
        }
        last
    }

    // ===== Construction Tests =====

    #[test]
    fn test_switch_default() {
        let switch = SqueezeSwitch::new();
        assert!(switch.is_on());
        assert!(!switch.is_animating());
        assert!(switch.is_interactive());
        assert_eq!(switch.current_image(), "Circle_Ok");
        assert_eq!(switch.palette().on, Color::rgb(0.15, 0.76, 0.51));
    }

    #[test]
    fn test_switch_builder() {
        let switch = SqueezeSwitch::with_state(false)
            .on_image("Tick")
            .off_image("Cross")
            .track_color(Color::WHITE);
        assert!(!switch.is_on());
        assert_eq!(switch.current_image(), "Cross");
        assert_eq!(switch.palette().track, Color::WHITE);
    }

    #[test]
    fn test_motion_builder_clamps() {
        let switch = SqueezeSwitch::new().motion(MotionConfig {
            move_duration: -1.0,
            bounce_damping: 4.0,
            ..MotionConfig::default()
        });
        assert_eq!(switch.driver.timing().move_duration, 0.0);
        assert_eq!(switch.driver.timing().bounce_damping, 1.0);
    }

    #[test]
    fn test_from_config() {
        let mut config = SwitchConfig::default();
        config.on = false;
        config.off_image = "No".into();
        let switch = SqueezeSwitch::from_config(&config).expect("valid config");
        assert!(!switch.is_on());
        assert_eq!(switch.current_image(), "No");

        config.on_color = "nope".into();
        assert!(SqueezeSwitch::from_config(&config).is_err());
    }

    #[test]
    fn test_measure_uses_preferred_size() {
        let switch = SqueezeSwitch::new().preferred_size(Size::new(200.0, 50.0));
        assert_eq!(switch.measure(Constraints::loose(Size::new(100.0, 100.0))), Size::new(100.0, 50.0));
    }

    // ===== Layout & Paint Tests =====

    #[test]
    fn test_layout_docks_knob() {
        let switch = laid_out(false);
        assert_eq!(switch.scene().knob_x(), 270.0);
        assert!(switch.scene().is_docked());
    }

    #[test]
    fn test_paint_order() {
        let switch = laid_out(true);
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 5);
        assert!(matches!(commands[0], DrawCommand::PushClip { .. }));
        assert!(matches!(commands[1], DrawCommand::Rect { .. }));
        match &commands[2] {
            DrawCommand::Fill { color, .. } => assert_eq!(*color, switch.palette().on),
            other => panic!("Expected Fill, got {other:?}"),
        }
        match &commands[3] {
            DrawCommand::Image { name, bounds } => {
                assert_eq!(name, "Circle_Ok");
                assert_eq!(*bounds, Rect::new(9.0, 9.0, 42.0, 42.0));
            }
            other => panic!("Expected Image, got {other:?}"),
        }
        assert!(matches!(commands[4], DrawCommand::PopClip));
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn test_paint_translates_to_bounds() {
        let mut switch = SqueezeSwitch::new();
        switch.layout(Rect::new(100.0, 50.0, 300.0, 60.0));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let (_, image_bounds) = canvas.images().next().expect("knob image");
        assert_eq!(image_bounds, Rect::new(109.0, 59.0, 42.0, 42.0));
    }

    #[test]
    fn test_zero_bounds_paint_nothing() {
        let mut switch = SqueezeSwitch::new();
        switch.layout(Rect::new(0.0, 0.0, 0.0, 0.0));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        assert!(canvas.is_empty());
    }

    // ===== Interaction Tests =====

    #[test]
    fn test_click_toggles_with_message() {
        let mut switch = laid_out(true);
        assert!(switch.event(&Event::press(Point::new(30.0, 30.0))).is_none());
        assert!(switch.event(&Event::release(Point::new(30.0, 30.0))).is_none());
        assert_eq!(switch.phase(), Some(Phase::MoveToMiddle));
        assert!(switch.is_animating());

        assert_eq!(run(&mut switch), Some(SwitchToggled { on: false }));
        assert!(!switch.is_on());
        assert_eq!(switch.current_image(), "Circle_No");
    }

    #[test]
    fn test_drag_via_events() {
        let mut switch = laid_out(true);
        switch.event(&Event::press(Point::new(30.0, 30.0)));
        switch.event(&Event::drag_to(Point::new(100.0, 30.0)));
        assert!(switch.is_dragging());
        switch.event(&Event::drag_to(Point::new(200.0, 30.0)));
        assert_eq!(switch.scene().knob_x(), 175.5);
        switch.event(&Event::release(Point::new(200.0, 30.0)));
        assert!(!switch.is_dragging());

        assert_eq!(run(&mut switch), Some(SwitchToggled { on: false }));
        assert_eq!(switch.scene().knob_x(), 270.0);
    }

    #[test]
    fn test_set_on_cancels_transition() {
        let mut switch = laid_out(true);
        switch.toggle_animated();
        switch.tick(FRAME);
        switch.set_on(true);
        assert!(!switch.is_animating());
        assert!(switch.scene().is_docked());
        assert!(switch.is_on());
    }

    #[test]
    fn test_resize_mid_transition_commits_goal() {
        let mut switch = laid_out(true);
        switch.toggle_animated();
        switch.tick(FRAME);
        switch.layout(Rect::new(0.0, 0.0, 200.0, 40.0));

        assert!(!switch.is_on());
        assert!(switch.scene().is_docked());
        assert!(switch.is_animating(), "message still pending");
        assert_eq!(toggled(switch.tick(FRAME)), Some(SwitchToggled { on: false }));
        assert!(!switch.is_animating());
    }

    #[test]
    fn test_retap_past_center_reports_correction() {
        let mut switch = laid_out(true);
        switch.toggle_animated();
        while switch.phase() == Some(Phase::MoveToMiddle) {
            switch.tick(FRAME);
        }
        assert_eq!(switch.toggle_animated(), Some(SwitchToggled { on: false }));
        assert!(!switch.is_on());
        assert_eq!(run(&mut switch), Some(SwitchToggled { on: true }));
    }

    #[test]
    fn test_toggle_during_drag_corrects_from_knob() {
        let mut switch = laid_out(true);
        switch.event(&Event::press(Point::new(30.0, 30.0)));
        switch.event(&Event::drag_to(Point::new(100.0, 30.0)));
        switch.event(&Event::drag_to(Point::new(170.0, 30.0)));
        assert!(switch.is_dragging());
        assert_eq!(switch.scene().knob_x(), 170.0);

        assert_eq!(switch.toggle_animated(), Some(SwitchToggled { on: false }));
        assert!(!switch.is_dragging());
        assert!(switch.scene().state().goal());
        assert_eq!(run(&mut switch), Some(SwitchToggled { on: true }));
        assert!(switch.is_on());
        assert_eq!(switch.scene().knob_x(), 30.0);
    }

    #[test]
    fn test_same_bounds_layout_keeps_transition() {
        let mut switch = laid_out(true);
        switch.toggle_animated();
        switch.tick(FRAME);
        switch.layout(Rect::new(0.0, 0.0, 300.0, 60.0));
        assert_eq!(switch.phase(), Some(Phase::MoveToMiddle));
    }
}
