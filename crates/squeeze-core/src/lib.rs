//! Core types and traits for the squeeze switch.
//!
//! This crate provides the host-facing foundations the switch is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Vector paths with Bezier segments: [`Path`]
//! - Color representation: [`Color`]
//! - Input events: [`Event`]
//! - Animation primitives: [`Easing`], [`DampedSpring`], [`Motion`]
//! - Rendering seams: [`Widget`], [`Canvas`], [`RecordingCanvas`]

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod path;
pub mod widget;

pub use animation::{BuiltinMotions, DampedSpring, EasedValue, Easing, Motion, MotionFactory};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, MouseButton, PointerId, PointerType, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use path::{Path, PathCommand};
pub use widget::{Canvas, LayoutResult, TypeId, Widget};
