//! Vector paths built from lines and Bezier segments.
//!
//! A [`Path`] is an ordered list of [`PathCommand`]s, the same model a
//! canvas or compositor mask consumes. Paths can be flattened into polygons
//! for backends that only fill point lists.

use crate::geometry::{CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Control-point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// One drawing instruction in a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new subpath at a point
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Quadratic Bezier curve
    QuadTo {
        /// Control point
        ctrl: Point,
        /// End point
        to: Point,
    },
    /// Cubic Bezier curve
    CubicTo {
        /// First control point
        ctrl1: Point,
        /// Second control point
        ctrl2: Point,
        /// End point
        to: Point,
    },
    /// Close the current subpath back to its start
    Close,
}

/// A sequence of subpaths.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Straight segment between two points.
    #[must_use]
    pub fn line(from: Point, to: Point) -> Self {
        let mut path = Self::new();
        path.move_to(from).line_to(to);
        path
    }

    /// Rectangle with per-corner rounding. Radii are fitted to the rectangle.
    #[must_use]
    pub fn rounded_rect(rect: Rect, radius: CornerRadius) -> Self {
        let r = radius.fit(rect.width, rect.height);
        let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());
        let mut path = Self::new();

        path.move_to(Point::new(left + r.top_left, top));
        path.line_to(Point::new(right - r.top_right, top));
        if r.top_right > 0.0 {
            let k = r.top_right * KAPPA;
            path.cubic_to(
                Point::new(right - r.top_right + k, top),
                Point::new(right, top + r.top_right - k),
                Point::new(right, top + r.top_right),
            );
        }
        path.line_to(Point::new(right, bottom - r.bottom_right));
        if r.bottom_right > 0.0 {
            let k = r.bottom_right * KAPPA;
            path.cubic_to(
                Point::new(right, bottom - r.bottom_right + k),
                Point::new(right - r.bottom_right + k, bottom),
                Point::new(right - r.bottom_right, bottom),
            );
        }
        path.line_to(Point::new(left + r.bottom_left, bottom));
        if r.bottom_left > 0.0 {
            let k = r.bottom_left * KAPPA;
            path.cubic_to(
                Point::new(left + r.bottom_left - k, bottom),
                Point::new(left, bottom - r.bottom_left + k),
                Point::new(left, bottom - r.bottom_left),
            );
        }
        path.line_to(Point::new(left, top + r.top_left));
        if r.top_left > 0.0 {
            let k = r.top_left * KAPPA;
            path.cubic_to(
                Point::new(left, top + r.top_left - k),
                Point::new(left + r.top_left - k, top),
                Point::new(left + r.top_left, top),
            );
        }
        path.close();
        path
    }

    /// Begin a new subpath.
    pub fn move_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    /// Add a straight line.
    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    /// Add a quadratic curve.
    pub fn quad_to(&mut self, ctrl: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
        self
    }

    /// Add a cubic curve.
    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> &mut Self {
        self.commands
            .push(PathCommand::CubicTo { ctrl1, ctrl2, to });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Append all subpaths of another path.
    pub fn append(&mut self, other: &Self) -> &mut Self {
        self.commands.extend_from_slice(&other.commands);
        self
    }

    /// The recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Whether the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the last subpath is explicitly closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Copy of this path moved by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Point) -> Self {
        let shift = |p: Point| p + offset;
        let commands = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(shift(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(shift(p)),
                PathCommand::QuadTo { ctrl, to } => PathCommand::QuadTo {
                    ctrl: shift(ctrl),
                    to: shift(to),
                },
                PathCommand::CubicTo { ctrl1, ctrl2, to } => PathCommand::CubicTo {
                    ctrl1: shift(ctrl1),
                    ctrl2: shift(ctrl2),
                    to: shift(to),
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Self { commands }
    }

    /// Bounding box of all points, including control points.
    #[must_use]
    pub fn control_bounds(&self) -> Option<Rect> {
        let mut points = self.commands.iter().flat_map(|cmd| {
            let pts: [Option<Point>; 3] = match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => [Some(p), None, None],
                PathCommand::QuadTo { ctrl, to } => [Some(ctrl), Some(to), None],
                PathCommand::CubicTo { ctrl1, ctrl2, to } => [Some(ctrl1), Some(ctrl2), Some(to)],
                PathCommand::Close => [None, None, None],
            };
            pts.into_iter().flatten()
        });

        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    /// Flatten into one point list per subpath, sampling every curve with
    /// `segments` straight pieces.
    #[must_use]
    pub fn flatten(&self, segments: usize) -> Vec<Vec<Point>> {
        let segments = segments.max(1);
        let mut polys: Vec<Vec<Point>> = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut cursor = Point::ORIGIN;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    if !current.is_empty() {
                        polys.push(std::mem::take(&mut current));
                    }
                    current.push(p);
                    cursor = p;
                }
                PathCommand::LineTo(p) => {
                    if current.is_empty() {
                        current.push(cursor);
                    }
                    current.push(p);
                    cursor = p;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    if current.is_empty() {
                        current.push(cursor);
                    }
                    let from = cursor;
                    current.extend(
                        (1..=segments).map(|i| quad_point(from, ctrl, to, i as f32 / segments as f32)),
                    );
                    cursor = to;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    if current.is_empty() {
                        current.push(cursor);
                    }
                    let from = cursor;
                    current.extend((1..=segments).map(|i| {
                        cubic_point(from, ctrl1, ctrl2, to, i as f32 / segments as f32)
                    }));
                    cursor = to;
                }
                PathCommand::Close => {
                    if let Some(&start) = current.first() {
                        cursor = start;
                        polys.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            polys.push(current);
        }
        polys
    }

    /// Absolute enclosed area of the flattened path (shoelace per subpath).
    ///
    /// A path made of a single straight segment encloses nothing.
    #[must_use]
    pub fn area(&self, segments: usize) -> f32 {
        self.flatten(segments)
            .iter()
            .map(|poly| {
                let n = poly.len();
                let twice: f32 = (0..n)
                    .map(|i| {
                        let a = poly[i];
                        let b = poly[(i + 1) % n];
                        a.x.mul_add(b.y, -(b.x * a.y))
                    })
                    .sum();
                twice.abs() / 2.0
            })
            .sum()
    }
}

/// Point on a quadratic Bezier at parameter `t`.
#[must_use]
pub fn quad_point(p0: Point, ctrl: Point, p1: Point, t: f32) -> Point {
    let a = p0.lerp(&ctrl, t);
    let b = ctrl.lerp(&p1, t);
    a.lerp(&b, t)
}

/// Point on a cubic Bezier at parameter `t`.
#[must_use]
pub fn cubic_point(p0: Point, c1: Point, c2: Point, p1: Point, t: f32) -> Point {
    let a = quad_point(p0, c1, c2, t);
    let b = quad_point(c1, c2, p1, t);
    a.lerp(&b, t)
}
