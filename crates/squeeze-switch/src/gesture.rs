//! Pointer input: recognizing pans and taps, and dragging the knob.
//!
//! [`PanRecognizer`] turns raw mouse, touch and pointer events into
//! [`Recognized`] pans and taps. [`GestureController`] applies pans to the
//! scene: the knob follows the pointer within its legal range, the membrane
//! stretches live, and release hands the knob to the [`AnimationDriver`].

use crate::driver::{AnimationDriver, Transition};
use crate::scene::Scene;
use squeeze_core::{Event, MouseButton, Point, PointerId, Rect, TouchId};
use tracing::{debug, trace};

/// Stage of a pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    /// Pointer moved past the slop
    Began,
    /// Pointer moved
    Changed,
    /// Pointer released
    Ended,
    /// Pan aborted by the host
    Cancelled,
}

/// One pan update, with x local to the switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    /// Stage
    pub phase: PanPhase,
    /// Pointer x relative to the switch's left edge
    pub x: f32,
}

impl PanEvent {
    /// Create a pan event.
    #[must_use]
    pub const fn new(phase: PanPhase, x: f32) -> Self {
        Self { phase, x }
    }
}

/// Output of [`PanRecognizer::process`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recognized {
    /// Pan update
    Pan(PanEvent),
    /// Press and release without crossing the slop
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Mouse,
    Touch(TouchId),
    Pointer(PointerId),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    source: Source,
    start: Point,
    last: Point,
    panning: bool,
}

/// Single-pointer pan and tap recognizer.
///
/// Only the first pointer pressed inside the bounds is tracked; other
/// pointers are ignored until it lifts.
#[derive(Debug, Clone)]
pub struct PanRecognizer {
    slop: f32,
    press: Option<Press>,
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAN_SLOP)
    }
}

impl PanRecognizer {
    /// Create a recognizer that starts a pan after `slop` units of travel.
    #[must_use]
    pub fn new(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            press: None,
        }
    }

    /// Travel needed before a press becomes a pan.
    #[must_use]
    pub const fn slop(&self) -> f32 {
        self.slop
    }

    /// Whether a press is being tracked.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.press.is_some()
    }

    /// Whether the tracked press has become a pan.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.press.is_some_and(|p| p.panning)
    }

    /// Forget the tracked press.
    pub fn reset(&mut self) {
        self.press = None;
    }

    /// Feed one event. `bounds` are the switch's bounds in event coordinates.
    pub fn process(&mut self, event: &Event, bounds: Rect) -> Option<Recognized> {
        match *event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.press(Source::Mouse, position, bounds),
            Event::MouseMove { position } => self.moved(Source::Mouse, position, bounds),
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.released(Source::Mouse, position, bounds),
            Event::TouchStart { id, position } => self.press(Source::Touch(id), position, bounds),
            Event::TouchMove { id, position } => self.moved(Source::Touch(id), position, bounds),
            Event::TouchEnd { id, position } => self.released(Source::Touch(id), position, bounds),
            Event::TouchCancel { id } => self.cancelled(Source::Touch(id), bounds),
            Event::PointerDown {
                pointer_id,
                position,
                is_primary: true,
                ..
            } => self.press(Source::Pointer(pointer_id), position, bounds),
            Event::PointerMove {
                pointer_id,
                position,
                ..
            } => self.moved(Source::Pointer(pointer_id), position, bounds),
            Event::PointerUp {
                pointer_id,
                position,
                ..
            } => self.released(Source::Pointer(pointer_id), position, bounds),
            Event::PointerCancel { pointer_id } => self.cancelled(Source::Pointer(pointer_id), bounds),
            _ => None,
        }
    }

    fn press(&mut self, source: Source, position: Point, bounds: Rect) -> Option<Recognized> {
        if self.press.is_some() || !bounds.contains_point(&position) {
            return None;
        }
        self.press = Some(Press {
            source,
            start: position,
            last: position,
            panning: false,
        });
        None
    }

    fn moved(&mut self, source: Source, position: Point, bounds: Rect) -> Option<Recognized> {
        let press = self.press.as_mut().filter(|p| p.source == source)?;
        let x = position.x - bounds.x;
        press.last = position;
        if press.panning {
            return Some(Recognized::Pan(PanEvent::new(PanPhase::Changed, x)));
        }
        if press.start.distance(&position) > self.slop {
            press.panning = true;
            return Some(Recognized::Pan(PanEvent::new(PanPhase::Began, x)));
        }
        None
    }

    fn released(&mut self, source: Source, position: Point, bounds: Rect) -> Option<Recognized> {
        let press = self.take(source)?;
        if press.panning {
            Some(Recognized::Pan(PanEvent::new(PanPhase::Ended, position.x - bounds.x)))
        } else {
            Some(Recognized::Tap)
        }
    }

    fn cancelled(&mut self, source: Source, bounds: Rect) -> Option<Recognized> {
        let press = self.take(source)?;
        press
            .panning
            .then(|| Recognized::Pan(PanEvent::new(PanPhase::Cancelled, press.last.x - bounds.x)))
    }

    fn take(&mut self, source: Source) -> Option<Press> {
        match self.press {
            Some(p) if p.source == source => self.press.take(),
            _ => None,
        }
    }
}

/// Applies pans to a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureController {
    dragging: bool,
    last_x: f32,
}

impl GestureController {
    /// Create an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dragging: false,
            last_x: 0.0,
        }
    }

    /// Whether the knob is held by the pointer.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last clamped knob x applied by a drag.
    #[must_use]
    pub const fn last_x(&self) -> f32 {
        self.last_x
    }

    /// Drop a drag without releasing the knob.
    pub fn abandon(&mut self) {
        self.dragging = false;
    }

    /// Apply one pan update.
    ///
    /// Returns a transition when the pan interrupts a running animation or
    /// when a release commits without animating.
    pub fn handle(
        &mut self,
        pan: PanEvent,
        scene: &mut Scene,
        driver: &mut AnimationDriver,
    ) -> Option<Transition> {
        match pan.phase {
            PanPhase::Began => {
                let interrupted = driver.interrupt(scene);
                self.dragging = true;
                debug!(on = scene.is_on(), x = pan.x, "drag began");
                self.drag_to(pan.x, scene);
                interrupted
            }
            PanPhase::Changed => {
                if self.dragging {
                    self.drag_to(pan.x, scene);
                }
                None
            }
            PanPhase::Ended => self.release(pan.x, scene, driver),
            PanPhase::Cancelled => self.release(self.last_x, scene, driver),
        }
    }

    fn drag_to(&mut self, x: f32, scene: &mut Scene) {
        let on = scene.is_on();
        let x = scene.layout().clamp_drag(x, on);
        self.last_x = x;
        scene.set_knob_x(x);
        scene.stretch_to_knob();
        scene.set_fill(!on);
        trace!(x, "drag");
    }

    fn release(&mut self, x: f32, scene: &mut Scene, driver: &mut AnimationDriver) -> Option<Transition> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;

        let layout = *scene.layout();
        let x = layout.clamp_drag(x, scene.is_on());
        scene.set_knob_x(x);
        let goal = layout.release_goal(x);
        debug!(x, goal, "drag released");
        driver.start_release(scene, goal)
    }
}
