use std::f64::consts::PI;

use crate::error::{Result, require_positive};
use crate::types::{Point, XForm};

/// A regular pentagon centered on the origin.
///
/// ```text
///          A
///         ,'.
///       ,'   `.
///   E ,'       `. B
///     \         /
///      \       /
///       \_____/
///      D       C
/// ```
///
/// At rotation 0 vertex A points straight up and the vertices run A..E.
/// `width` is the span between two non-adjacent vertices (E to B).
#[derive(Debug, Clone, PartialEq)]
pub struct Pentagon {
    width: f64,
    side: f64,
    radius: f64,
    rotation: f64,
}

/// The golden ratio, the diagonal to side ratio of a regular pentagon
const PHI: f64 = 1.618_033_988_749_895;

impl Pentagon {
    pub fn new(width: f64, rotation: f64) -> Result<Self> {
        require_positive("width", width)?;
        Ok(Self {
            width,
            side: width / PHI,
            radius: width / (2.0 * (PI / 10.0).cos()),
            rotation,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// The five vertices A, B, C, D, E, rotated by `rotation` about the origin
    pub fn vertices(&self) -> [Point; 5] {
        let r = self.radius;
        let c1 = (2.0 * PI / 5.0).cos() * r;
        let c2 = (PI / 5.0).cos() * r;
        let s1 = (2.0 * PI / 5.0).sin() * r;
        let s2 = (4.0 * PI / 5.0).sin() * r;

        let rotate = XForm::rotation(self.rotation);
        [
            Point::new(0.0, r),
            Point::new(s1, c1),
            Point::new(s2, -c2),
            Point::new(-s2, -c2),
            Point::new(-s1, c1),
        ]
        .map(|p| rotate.transform_point(&p))
    }

    /// Vertices closed back to A
    pub fn outline(&self) -> Vec<Point> {
        super::closed_loop(&self.vertices())
    }
}
