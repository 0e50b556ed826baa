use std::f64::consts::PI;

use super::Pentagon;
use crate::bounds::Bounds;
use crate::error::{Result, StarError, require_positive};
use crate::types::{Point, XForm};

/// Default ratio in width of the outer to the inner pentagon.
pub const DEFAULT_OUTER_TO_INNER_RATIO: f64 = 11.0 / 5.3;

/// A five pointed star built from two pentagons.
///
/// The outer pentagon is rotated half a turn so its vertices form the star
/// points; the inner, unrotated pentagon forms the notches between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    ratio: f64,
    outer: Pentagon,
    inner: Pentagon,
    vertices: [Point; 10],
}

impl Star {
    /// Star of the given overall width with the default ratio
    pub fn new(outer_width: f64) -> Result<Self> {
        Self::with_ratio(outer_width, DEFAULT_OUTER_TO_INNER_RATIO)
    }

    pub fn with_ratio(outer_width: f64, ratio: f64) -> Result<Self> {
        require_positive("width", outer_width)?;
        if !(ratio > 1.0 && ratio.is_finite()) {
            return Err(StarError::InvalidGeometryParameter {
                name: "ratio",
                value: ratio,
                reason: "outer to inner ratio must be greater than 1",
            });
        }

        let outer = Pentagon::new(outer_width, PI)?;
        let inner = Pentagon::new(outer_width / ratio, 0.0)?;

        // The inner pentagon points the other way, so its vertex facing
        // outer[ix] sits three places further round.
        let outer_v = outer.vertices();
        let inner_v = inner.vertices();
        let mut vertices = [Point::default(); 10];
        for ix in 0..5 {
            vertices[2 * ix] = outer_v[ix];
            vertices[2 * ix + 1] = inner_v[(ix + 3) % 5];
        }

        Ok(Self {
            ratio,
            outer,
            inner,
            vertices,
        })
    }

    /// The ten star vertices, alternating outer point and inner notch
    pub fn vertices(&self) -> &[Point; 10] {
        &self.vertices
    }

    /// Vertices closed back to the first one
    pub fn outline(&self) -> Vec<Point> {
        super::closed_loop(&self.vertices)
    }

    /// Consecutive vertex pairs, wrapping from the last vertex to the first
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |ix| (self.vertices[ix], self.vertices[(ix + 1) % n]))
    }

    /// Length of one star edge (all ten are equal)
    pub fn edge_length(&self) -> f64 {
        self.vertices[0].distance(&self.vertices[1])
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn outer_width(&self) -> f64 {
        self.outer.width()
    }

    pub fn outer_pentagon(&self) -> &Pentagon {
        &self.outer
    }

    pub fn inner_pentagon(&self) -> &Pentagon {
        &self.inner
    }

    pub fn bounding_box(&self) -> Bounds {
        Bounds::from_points(self.vertices.iter())
    }

    pub fn width(&self) -> f64 {
        self.bounding_box().width()
    }

    pub fn height(&self) -> f64 {
        self.bounding_box().height()
    }

    /// Translation that moves the star into the non-negative quadrant
    pub fn alignment_transform(&self) -> XForm {
        self.bounding_box().alignment_transform()
    }
}
