//! Cubic Bézier easing curves.

use serde::{Deserialize, Serialize};

/// A 2D control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Four control points of a cubic Bézier curve.
///
/// The endpoints are conventionally `(0, 0)` and `(1, 1)` but are stored like the
/// inner points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve(pub [Point; 4]);

impl Curve {
    pub const fn new(points: [Point; 4]) -> Self {
        Self(points)
    }

    /// The straight diagonal from `(0, 0)` to `(1, 1)`.
    pub const fn linear() -> Self {
        Self([
            Point::new(0.0, 0.0),
            Point::new(1.0 / 3.0, 1.0 / 3.0),
            Point::new(2.0 / 3.0, 2.0 / 3.0),
            Point::new(1.0, 1.0),
        ])
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    pub fn evaluate(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = self.0;
        let u = 1.0 - t;
        let w0 = u * u * u;
        let w1 = 3.0 * u * u * t;
        let w2 = 3.0 * u * t * t;
        let w3 = t * t * t;
        Point::new(
            w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
            w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
        )
    }

    /// Whether every control point matches within `tolerance`.
    pub fn approx_eq(&self, other: &Curve, tolerance: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance)
    }
}
