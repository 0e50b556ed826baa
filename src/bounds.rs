use crate::types::{Hole, Point, XForm};

/// Bounding box
///
/// Accumulation starts from a box pinned at the origin rather than from the
/// first point, so a box built by [`Bounds::from_points`] always contains
/// (0, 0). Stars are always centered on the origin, so for them this is the
/// tight box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::zero()
    }
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The zero-seeded accumulator
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut bounds = Self::zero();
        for p in points {
            bounds.include_point(p);
        }
        bounds
    }

    /// Union of the square extents of every hole, zero-seeded
    pub fn from_holes<'a>(holes: impl IntoIterator<Item = &'a Hole>) -> Self {
        let mut bounds = Self::zero();
        for hole in holes {
            bounds.include_point(&hole.min_corner());
            bounds.include_point(&hole.max_corner());
        }
        bounds
    }

    pub fn include_point(&mut self, p: &Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn expand(&mut self, other: &Bounds) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Translation that moves the min corner onto the origin
    pub fn alignment_transform(&self) -> XForm {
        XForm::translation(-self.min_x, -self.min_y)
    }

    /// The box moved by a translation-only transform
    pub fn translated(&self, xform: &XForm) -> Bounds {
        Bounds::new(
            self.min_x + xform.translate_x(),
            self.min_y + xform.translate_y(),
            self.max_x + xform.translate_x(),
            self.max_y + xform.translate_y(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_includes_origin() {
        let pts = [Point::new(2.0, 3.0), Point::new(5.0, 4.0)];
        let b = Bounds::from_points(pts.iter());
        assert_eq!(b, Bounds::new(0.0, 0.0, 5.0, 4.0));
    }

    #[test]
    fn test_straddling_origin_is_tight() {
        let pts = [Point::new(-2.0, 3.0), Point::new(5.0, -4.0)];
        let b = Bounds::from_points(pts.iter());
        assert_eq!(b, Bounds::new(-2.0, -4.0, 5.0, 3.0));
        assert_eq!(b.width(), 7.0);
        assert_eq!(b.height(), 7.0);
    }

    #[test]
    fn test_alignment_moves_min_to_origin() {
        let b = Bounds::new(-2.0, -4.0, 5.0, 3.0);
        let moved = b.translated(&b.alignment_transform());
        assert_eq!(moved, Bounds::new(0.0, 0.0, 7.0, 7.0));
    }

    #[test]
    fn test_from_holes_uses_diameter() {
        let holes = [Hole {
            center: Point::new(-1.0, 1.0),
            diameter: 2.0,
            is_vertex: true,
            number: 1,
        }];
        let b = Bounds::from_holes(holes.iter());
        assert_eq!(b, Bounds::new(-2.0, 0.0, 0.0, 2.0));
    }
}
