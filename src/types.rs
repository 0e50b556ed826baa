use serde::{Deserialize, Serialize};

/// 2D point in drawing units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point at `t` along the segment from `self` to `end` (0 = self, 1 = end)
    pub fn lerp(&self, end: &Point, t: f64) -> Point {
        Point {
            x: self.x + (end.x - self.x) * t,
            y: self.y + (end.y - self.y) * t,
        }
    }
}

/// 2D affine transformation matrix [a, b, c, d, e, f]
/// Represents: | a  c  e |
///             | b  d  f |
///             | 0  0  1 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XForm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for XForm {
    fn default() -> Self {
        Self::identity()
    }
}

impl XForm {
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Rotation about the origin by `theta` radians (counter-clockwise)
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Pure translation by (dx, dy)
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            e: dx,
            f: dy,
            ..Self::identity()
        }
    }

    /// Compose two transforms: self * other
    pub fn compose(&self, other: &XForm) -> XForm {
        XForm {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Transform a point
    pub fn transform_point(&self, p: &Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    pub fn translate_x(&self) -> f64 {
        self.e
    }

    pub fn translate_y(&self) -> f64 {
        self.f
    }
}

/// A circular aperture placed on a star layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub center: Point,
    pub diameter: f64,
    /// Holes on a star point anchor their edges and are never dropped.
    pub is_vertex: bool,
    /// 1-based label, continuous across all layers of a pixel star.
    pub number: usize,
}

impl Hole {
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Top-left corner of the hole's bounding square
    pub fn min_corner(&self) -> Point {
        Point::new(self.center.x - self.radius(), self.center.y - self.radius())
    }

    /// Bottom-right corner of the hole's bounding square
    pub fn max_corner(&self) -> Point {
        Point::new(self.center.x + self.radius(), self.center.y + self.radius())
    }

    /// The same hole moved into another frame
    pub fn transformed(&self, xform: &XForm) -> Hole {
        Hole {
            center: xform.transform_point(&self.center),
            ..*self
        }
    }
}

/// How holes are drawn by the drawing exporters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleFormat {
    /// Holes are drawn as outlines.
    #[default]
    Outline,
    /// Holes are solid black.
    Solid,
    /// Outlined holes with a drill target crosshair in the middle.
    OutlineTarget,
}
