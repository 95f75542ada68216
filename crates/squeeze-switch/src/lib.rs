//! Liquid squeeze toggle switch.
//!
//! A circular knob travels across a pill-shaped track split by a narrow
//! center gap. While it crosses, a membrane of track material stretches
//! behind it and snaps free, then springs into place.
//!
//! The crate is layered, leaves first:
//! - [`LayoutConstants`]: fixed geometry derived from bounds
//! - [`MembraneGenerator`]: pure Bezier outline of the membrane
//! - [`ControlState`] and [`Scene`]: committed value and what is displayed
//! - [`AnimationDriver`]: move-to-middle then spring-bounce sessions
//! - [`GestureController`] and [`PanRecognizer`]: pointer dragging and taps
//! - [`SqueezeSwitch`]: the [`Widget`](squeeze_core::Widget) tying them together
//!
//! # Examples
//!
//! ```
//! use squeeze_core::{Rect, RecordingCanvas, Widget};
//! use squeeze_switch::{SqueezeSwitch, SwitchToggled};
//!
//! let mut switch = SqueezeSwitch::with_state(true);
//! switch.layout(Rect::new(0.0, 0.0, 300.0, 60.0));
//! switch.toggle_animated();
//!
//! let mut toggled = None;
//! while switch.is_animating() {
//!     if let Some(msg) = switch.tick(1.0 / 60.0) {
//!         toggled = msg.downcast_ref::<SwitchToggled>().copied();
//!     }
//! }
//! assert_eq!(toggled, Some(SwitchToggled { on: false }));
//!
//! let mut canvas = RecordingCanvas::new();
//! switch.paint(&mut canvas);
//! assert_eq!(canvas.clip_depth(), 0);
//! ```

pub mod config;
pub mod driver;
mod error;
pub mod gesture;
pub mod layout;
pub mod membrane;
pub mod scene;
mod state;
mod switch;

pub use config::{MotionConfig, Palette, SwitchConfig, DEFAULT_PAN_SLOP};
pub use driver::{AnimationDriver, AnimationSession, Phase, Transition};
pub use error::ConfigError;
pub use gesture::{GestureController, PanEvent, PanPhase, PanRecognizer, Recognized};
pub use layout::LayoutConstants;
pub use membrane::{BounceFrame, Membrane, MembraneGenerator, MembraneTuning};
pub use scene::Scene;
pub use state::ControlState;
pub use switch::{SqueezeSwitch, SwitchToggled};
