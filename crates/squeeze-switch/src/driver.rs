//! Animation driver: move to the middle, then spring into place.
//!
//! A tap runs two phases. [`Phase::MoveToMiddle`] eases the knob to just
//! past the center while the membrane trails its leading edge; on arrival
//! the knob switches face and [`Phase::Bounce`] springs it into its new
//! resting place while a cosmetic lens wobbles at the gap. A drag release
//! enters the bounce directly, or a membrane-less [`Phase::Return`] spring
//! when the knob was not pulled past the center.
//!
//! At most one [`AnimationSession`] exists at a time. Starting a new one
//! drops the previous one before any further tick reaches it.

use crate::config::MotionConfig;
use crate::membrane::SETTLED_EPSILON;
use crate::scene::Scene;
use squeeze_core::{BuiltinMotions, Motion, MotionFactory};
use std::sync::Arc;
use tracing::{debug, trace};

/// Stage of a running transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Eased move to the overshoot point
    MoveToMiddle,
    /// Spring into the goal's resting place
    Bounce {
        /// Knob distance from rest when the bounce began
        max_offset: f32,
    },
    /// Spring back to the unchanged resting place
    Return,
}

/// One running transition.
#[derive(Debug)]
pub struct AnimationSession {
    phase: Phase,
    goal: bool,
    motion: Box<dyn Motion>,
}

impl AnimationSession {
    /// Current stage.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Value the transition commits on completion.
    #[must_use]
    pub const fn goal(&self) -> bool {
        self.goal
    }
}

/// Outcome of a completed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Committed value
    pub on: bool,
    /// Whether the value differs from before the transition
    pub changed: bool,
}

/// Runs [`AnimationSession`]s against a [`Scene`].
#[derive(Debug)]
pub struct AnimationDriver {
    motions: Arc<dyn MotionFactory>,
    timing: MotionConfig,
    session: Option<AnimationSession>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(Arc::new(BuiltinMotions), MotionConfig::default())
    }
}

impl AnimationDriver {
    /// Create a driver that builds its motions with `motions`.
    #[must_use]
    pub fn new(motions: Arc<dyn MotionFactory>, timing: MotionConfig) -> Self {
        Self {
            motions,
            timing,
            session: None,
        }
    }

    /// Timing in effect.
    #[must_use]
    pub const fn timing(&self) -> &MotionConfig {
        &self.timing
    }

    /// Change timing for transitions started from now on.
    pub fn set_timing(&mut self, timing: MotionConfig) {
        self.timing = timing;
    }

    /// Change the motion source for transitions started from now on.
    pub fn set_motions(&mut self, motions: Arc<dyn MotionFactory>) {
        self.motions = motions;
    }

    /// Running session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// Stage of the running session, if any.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.session.as_ref().map(AnimationSession::phase)
    }

    /// Whether a session is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Drop the running session without touching the scene.
    pub fn cancel(&mut self) -> Option<AnimationSession> {
        let session = self.session.take();
        if let Some(s) = &session {
            debug!(phase = ?s.phase, goal = s.goal, "animation cancelled");
        }
        session
    }

    /// Cancel the running session and re-derive the committed value from
    /// where it left the knob.
    ///
    /// Returns the corrected value when a session was running.
    pub fn interrupt(&mut self, scene: &mut Scene) -> Option<Transition> {
        self.cancel()?;
        let changed = scene.correct_from_live();
        Some(Transition {
            on: scene.is_on(),
            changed,
        })
    }

    /// Cancel the running session and commit its goal immediately.
    pub fn finish(&mut self, scene: &mut Scene) -> Option<Transition> {
        let session = self.cancel()?;
        Some(self.settle(scene, session.goal))
    }

    /// Start a tap transition toward the opposite value.
    ///
    /// The value is first corrected from the live knob x, which may sit
    /// mid-track after an interrupted session or an abandoned drag. The
    /// correction is returned when a session was interrupted or the value
    /// changed.
    pub fn start_toggle(&mut self, scene: &mut Scene) -> Option<Transition> {
        let interrupted = self.cancel().is_some();
        let changed = scene.correct_from_live();
        let corrected = (interrupted || changed).then(|| Transition {
            on: scene.is_on(),
            changed,
        });

        let goal = !scene.is_on();
        scene.begin(goal);
        scene.set_fill(goal);

        let from = scene.knob_x();
        let to = scene.layout().overshoot_x(goal);
        let motion = self.motions.eased(
            f64::from(from),
            f64::from(to),
            self.timing.move_duration,
            self.timing.move_easing,
        );
        debug!(goal, from, to, "move to middle started");
        self.session = Some(AnimationSession {
            phase: Phase::MoveToMiddle,
            goal,
            motion,
        });
        corrected
    }

    /// Hand a released knob over to the spring.
    ///
    /// Returns a transition when the knob already rests at its target.
    pub fn start_release(&mut self, scene: &mut Scene, goal: bool) -> Option<Transition> {
        self.cancel();
        scene.begin(goal);
        if goal == scene.is_on() {
            scene.flatten_membrane();
            return self.spring_to_rest(scene, goal, false);
        }
        scene.set_face(goal);
        self.spring_to_rest(scene, goal, true)
    }

    /// Advance the running session by `dt` seconds.
    ///
    /// Returns a transition on the tick the session commits.
    pub fn tick(&mut self, scene: &mut Scene, dt: f64) -> Option<Transition> {
        let session = self.session.as_mut()?;
        session.motion.advance(dt);

        let sample = session.motion.sample();
        match sample {
            Some(x) => {
                scene.set_knob_x(x as f32);
                match session.phase {
                    Phase::MoveToMiddle => scene.stretch_to_knob(),
                    Phase::Bounce { max_offset } => scene.show_bounce(session.goal, max_offset),
                    Phase::Return => {}
                }
                trace!(phase = ?session.phase, x, "frame");
            }
            None => trace!(phase = ?session.phase, "knob position unavailable, frame skipped"),
        }

        if !session.motion.is_settled() {
            return None;
        }
        let (phase, goal) = (session.phase, session.goal);
        let landed = sample.unwrap_or_else(|| session.motion.target());

        match phase {
            Phase::MoveToMiddle => {
                self.session = None;
                scene.set_knob_x(landed as f32);
                scene.set_face(goal);
                self.spring_to_rest(scene, goal, true)
            }
            Phase::Bounce { .. } | Phase::Return => Some(self.settle(scene, goal)),
        }
    }

    fn spring_to_rest(&mut self, scene: &mut Scene, goal: bool, bounce: bool) -> Option<Transition> {
        let from = scene.knob_x();
        let to = scene.layout().resting_x(goal);
        let distance = (to - from).abs();
        if distance <= SETTLED_EPSILON {
            return Some(self.settle(scene, goal));
        }

        let phase = if bounce {
            Phase::Bounce {
                max_offset: distance,
            }
        } else {
            Phase::Return
        };
        let motion = self.motions.spring(
            f64::from(from),
            f64::from(to),
            self.timing.bounce_duration,
            self.timing.bounce_damping,
        );
        debug!(?phase, goal, from, to, "spring started");
        self.session = Some(AnimationSession {
            phase,
            goal,
            motion,
        });
        None
    }

    fn settle(&mut self, scene: &mut Scene, goal: bool) -> Transition {
        self.session = None;
        let changed = scene.commit(goal);
        Transition {
            on: scene.is_on(),
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutConstants;
    use crate::membrane::MembraneGenerator;
    use squeeze_core::{Easing, Size};

    const FRAME: f64 = 1.0 / 60.0;

    fn scene(on: bool) -> Scene {
        let layout = LayoutConstants::from_bounds(Size::new(300.0, 60.0));
        Scene::new(MembraneGenerator::new(layout), on)
    }

    fn run_to_end(driver: &mut AnimationDriver, scene: &mut Scene) -> (Transition, usize) {
        for frame in 1..=600 {
            if let Some(t) = driver.tick(scene, FRAME) {
                return (t, frame);
            }
        }
        panic!("transition never completed");
    }

    /// Motions that jump to the target after `duration` and can optionally
    /// hide their live value.
    #[derive(Debug)]
    struct Scripted {
        target: f64,
        remaining: f64,
        observable: bool,
    }

    impl Motion for Scripted {
        fn advance(&mut self, dt: f64) {
            self.remaining -= dt;
        }

        fn sample(&self) -> Option<f64> {
            self.observable.then_some(self.target)
        }

        fn target(&self) -> f64 {
            self.target
        }

        fn is_settled(&self) -> bool {
            self.remaining <= 0.0
        }
    }

    #[derive(Debug)]
    struct ScriptedMotions {
        duration: f64,
        observable: bool,
    }

    impl MotionFactory for ScriptedMotions {
        fn eased(&self, _from: f64, to: f64, _d: f64, _e: Easing) -> Box<dyn Motion> {
            Box::new(Scripted {
                target: to,
                remaining: self.duration,
                observable: self.observable,
            })
        }

        fn spring(&self, _from: f64, to: f64, _d: f64, _z: f64) -> Box<dyn Motion> {
            Box::new(Scripted {
                target: to,
                remaining: self.duration,
                observable: self.observable,
            })
        }
    }

    fn scripted(duration: f64, observable: bool) -> AnimationDriver {
        AnimationDriver::new(
            Arc::new(ScriptedMotions {
                duration,
                observable,
            }),
            MotionConfig::default(),
        )
    }

    // ===== Tap Transition Tests =====

    #[test]
    fn test_toggle_starts_move_to_middle() {
        let mut s = scene(true);
        let mut d = AnimationDriver::default();
        d.start_toggle(&mut s);

        assert_eq!(d.phase(), Some(Phase::MoveToMiddle));
        assert!(!s.state().goal());
        assert!(s.is_on(), "value holds until commit");
        assert!(!s.membrane().fill_on(), "fill shows the goal color");
    }

    #[test]
    fn test_toggle_runs_both_phases() {
        let mut s = scene(true);
        let mut d = AnimationDriver::default();
        d.start_toggle(&mut s);

        let mut frames = 0;
        while d.phase() == Some(Phase::MoveToMiddle) {
            assert!(d.tick(&mut s, FRAME).is_none());
            frames += 1;
        }
        assert!((17..=19).contains(&frames));
        assert!((s.knob_x() - 175.5).abs() < 1e-3);
        assert!(!s.face_on(), "face switches at the middle");
        match d.phase() {
            Some(Phase::Bounce { max_offset }) => assert!((max_offset - 94.5).abs() < 1e-3),
            other => panic!("Expected Bounce, got {other:?}"),
        }

        let (t, _) = run_to_end(&mut d, &mut s);
        assert_eq!(t, Transition { on: false, changed: true });
        assert!(s.is_docked());
        assert_eq!(s.knob_x(), 270.0);
        assert!(!d.is_active());
    }

    #[test]
    fn test_toggle_from_off_heads_to_min_mid() {
        let mut s = scene(false);
        let mut d = scripted(0.0, true);
        d.start_toggle(&mut s);
        assert!(d.tick(&mut s, 0.0).is_none());
        assert_eq!(s.knob_x(), 124.5);
        assert!(s.face_on());
        let t = d.tick(&mut s, 0.0);
        assert_eq!(t, Some(Transition { on: true, changed: true }));
        assert_eq!(s.knob_x(), 30.0);
    }

    #[test]
    fn test_move_to_middle_stretches_membrane() {
        let mut s = scene(true);
        let mut d = AnimationDriver::default();
        d.start_toggle(&mut s);
        let flat = s.membrane().path().clone();
        for _ in 0..15 {
            d.tick(&mut s, FRAME);
        }
        assert_ne!(*s.membrane().path(), flat);
        assert!(s.membrane().path().is_closed());
    }

    // ===== Completion Edge Cases =====

    #[test]
    fn test_zero_tick_phases_complete() {
        let mut s = scene(true);
        let mut d = scripted(0.0, true);
        d.start_toggle(&mut s);

        assert!(d.tick(&mut s, 0.0).is_none(), "one phase per tick");
        assert!(matches!(d.phase(), Some(Phase::Bounce { .. })));
        assert_eq!(d.tick(&mut s, 0.0), Some(Transition { on: false, changed: true }));
        assert!(s.is_docked());
    }

    #[test]
    fn test_unobservable_motion_skips_path_updates() {
        let mut s = scene(true);
        let mut d = scripted(0.1, false);
        d.start_toggle(&mut s);
        let revision = s.membrane().revision();
        let x = s.knob_x();

        assert!(d.tick(&mut s, FRAME).is_none());
        assert_eq!(s.membrane().revision(), revision);
        assert_eq!(s.knob_x(), x);

        // completion falls back to the target
        for _ in 0..10 {
            d.tick(&mut s, FRAME);
        }
        assert!(matches!(d.phase(), Some(Phase::Bounce { .. })));
        let (t, _) = run_to_end(&mut d, &mut s);
        assert!(t.changed);
        assert!(s.is_docked());
    }

    #[test]
    fn test_tick_without_session_is_noop() {
        let mut s = scene(true);
        let mut d = AnimationDriver::default();
        let before = s.clone();
        assert!(d.tick(&mut s, FRAME).is_none());
        assert_eq!(s, before);
    }

    // ===== Interruption Tests =====

    #[test]
    fn test_retoggle_replaces_session() {
        let mut s = scene(true);
        let mut d = AnimationDriver::default();
        d.start_toggle(&mut s);
        for _ in 0..10 {
            d.tick(&mut s, FRAME);
        }
        // knob still left of center: correction keeps on, goal stays off
        assert_eq!(d.start_toggle(&mut s), Some(Transition { on: true, changed: false }));
        assert!(s.is_on());
        assert!(!s.state().goal());
        assert_eq!(d.phase(), Some(Phase::MoveToMiddle));
    }

    #[test]
    fn test_toggle_at_rest_reports_nothing() {
        let mut s = scene(true);
        let mut d = AnimationDriver::default();
        assert!(d.start_toggle(&mut s).is_none());
    }

    #[test]
    fn test_toggle_corrects_from_stranded_knob() {
        // knob left right of center with no session running
        let mut s = scene(true);
        s.set_knob_x(170.0);
        let mut d = AnimationDriver::default();

        assert_eq!(d.start_toggle(&mut s), Some(Transition { on: false, changed: true }));
        assert!(!s.is_on());
        assert!(s.state().goal(), "goal is the opposite of the corrected value");

        let (t, _) = run_to_end(&mut d, &mut s);
        assert_eq!(t, Transition { on: true, changed: true });
        assert!((s.knob_x() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_interrupt_during_bounce_corrects_value() {
        let mut s = scene(true);
        let mut d = scripted(0.0, true);
        d.start_toggle(&mut s);
        d.tick(&mut s, 0.0);
        assert!(s.is_on());
        assert_eq!(d.interrupt(&mut s), Some(Transition { on: false, changed: true }));
        assert!(!s.is_on(), "knob sat right of center");
        assert!(d.interrupt(&mut s).is_none(), "nothing left to interrupt");
    }

    #[test]
    fn test_finish_commits_goal() {
        let mut s = scene(true);
        let mut d = AnimationDriver::default();
        d.start_toggle(&mut s);
        d.tick(&mut s, FRAME);
        assert_eq!(d.finish(&mut s), Some(Transition { on: false, changed: true }));
        assert!(s.is_docked());
        assert!(d.finish(&mut s).is_none());
    }

    // ===== Release Tests =====

    #[test]
    fn test_release_past_center_bounces() {
        let mut s = scene(true);
        let mut d = AnimationDriver::default();
        s.set_knob_x(175.5);
        assert!(d.start_release(&mut s, false).is_none());
        assert!(!s.face_on());
        assert!(matches!(d.phase(), Some(Phase::Bounce { .. })));
        let (t, frames) = run_to_end(&mut d, &mut s);
        assert_eq!(t, Transition { on: false, changed: true });
        assert!((59..=61).contains(&frames));
    }

    #[test]
    fn test_release_same_side_returns() {
        let mut s = scene(true);
        let mut d = AnimationDriver::default();
        s.set_knob_x(100.0);
        s.stretch_to_knob();
        assert!(d.start_release(&mut s, true).is_none());
        assert_eq!(d.phase(), Some(Phase::Return));
        assert_eq!(*s.membrane().path(), s.generator().degenerate_path(true));

        let (t, _) = run_to_end(&mut d, &mut s);
        assert_eq!(t, Transition { on: true, changed: false });
        assert!(s.is_docked());
    }

    #[test]
    fn test_release_at_rest_commits_immediately() {
        let mut s = scene(false);
        let mut d = AnimationDriver::default();
        s.set_knob_x(30.0);
        assert_eq!(d.start_release(&mut s, true), Some(Transition { on: true, changed: true }));
        assert!(!d.is_active());
        assert!(s.is_docked());
    }
}
