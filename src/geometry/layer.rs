use super::{Star, evenly_space_points};
use crate::bounds::Bounds;
use crate::error::{Result, StarError, require_positive};
use crate::types::{Hole, Point, XForm};

/// Upper bound on holes along one edge; tighter spacings are rejected
pub const MAX_HOLES_PER_EDGE: usize = 100_000;

/// One row of pixels: a star outline with holes placed along its edges.
///
/// Hole placement starts at the top point of the star and walks the ten edges
/// in vertex order. Each edge contributes its leading vertex hole followed by
/// `holes_per_edge - 1` evenly spaced interior holes, ordered from the edge's
/// start towards its end, so a layer holds `10 * holes_per_edge` holes.
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayer {
    star: Star,
    hole_spacing: f64,
    hole_diameter: f64,
    holes_per_edge: usize,
    hole_count_start: usize,
    actual_hole_spacing: f64,
    holes: Vec<Hole>,
    alignment: Option<XForm>,
}

impl StarLayer {
    /// Layer whose hole count is derived from the requested spacing
    pub fn new(width: f64, ratio: f64, hole_spacing: f64, hole_diameter: f64) -> Result<Self> {
        require_positive("hole_spacing", hole_spacing)?;
        let star = Star::with_ratio(width, ratio)?;
        let derived = Self::derive_holes_per_edge(&star, hole_spacing);
        let holes_per_edge = checked_holes_per_edge(derived)?;
        Self::from_star(star, hole_spacing, hole_diameter, holes_per_edge, 0)
    }

    /// Layer with an explicit hole count, numbered from `hole_count_start + 1`
    pub fn with_holes_per_edge(
        width: f64,
        ratio: f64,
        hole_spacing: f64,
        hole_diameter: f64,
        holes_per_edge: usize,
        hole_count_start: usize,
    ) -> Result<Self> {
        let star = Star::with_ratio(width, ratio)?;
        Self::from_star(
            star,
            hole_spacing,
            hole_diameter,
            holes_per_edge,
            hole_count_start,
        )
    }

    /// Place holes on an already built star outline
    pub fn from_star(
        star: Star,
        hole_spacing: f64,
        hole_diameter: f64,
        holes_per_edge: usize,
        hole_count_start: usize,
    ) -> Result<Self> {
        require_positive("hole_diameter", hole_diameter)?;
        checked_holes_per_edge(i64::try_from(holes_per_edge).unwrap_or(i64::MAX))?;

        let holes = place_holes(&star, hole_diameter, holes_per_edge, hole_count_start);
        let actual_hole_spacing = star.edge_length() / holes_per_edge as f64;

        Ok(Self {
            star,
            hole_spacing,
            hole_diameter,
            holes_per_edge,
            hole_count_start,
            actual_hole_spacing,
            holes,
            alignment: None,
        })
    }

    /// Whole number of requested spacings that fit along one edge
    ///
    /// May be zero or negative for a star too small for the spacing; callers
    /// decide how to report that.
    pub fn derive_holes_per_edge(star: &Star, hole_spacing: f64) -> i64 {
        (star.edge_length() / hole_spacing).floor() as i64
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Only the holes sitting on star points and notches, in placement order
    pub fn vertex_holes(&self) -> Vec<Hole> {
        self.holes.iter().filter(|h| h.is_vertex).copied().collect()
    }

    pub fn pixel_count(&self) -> usize {
        self.holes.len()
    }

    /// Holes that are not on a star vertex
    pub fn interior_hole_count(&self) -> usize {
        10 * (self.holes_per_edge - 1)
    }

    pub fn holes_per_edge(&self) -> usize {
        self.holes_per_edge
    }

    pub fn hole_count_start(&self) -> usize {
        self.hole_count_start
    }

    pub fn hole_spacing(&self) -> f64 {
        self.hole_spacing
    }

    pub fn hole_diameter(&self) -> f64 {
        self.hole_diameter
    }

    /// Spacing achieved between neighbouring holes once the count is fixed,
    /// `edge_length / holes_per_edge`.
    ///
    /// The legacy star tool reported `edge_length / (holes_per_edge - 2)` here,
    /// so values differ from files it produced.
    pub fn actual_hole_spacing(&self) -> f64 {
        self.actual_hole_spacing
    }

    pub fn edge_length(&self) -> f64 {
        self.star.edge_length()
    }

    /// Union of the star outline and every hole's extent
    pub fn bounding_box(&self) -> Bounds {
        let mut bounds = self.star.bounding_box();
        bounds.expand(&Bounds::from_holes(self.holes.iter()));
        bounds
    }

    pub fn width(&self) -> f64 {
        self.bounding_box().width()
    }

    pub fn height(&self) -> f64 {
        self.bounding_box().height()
    }

    /// The shared frame if one was assigned, otherwise this layer's own
    pub fn alignment_transform(&self) -> XForm {
        self.alignment
            .unwrap_or_else(|| self.bounding_box().alignment_transform())
    }

    pub fn set_alignment_transform(&mut self, xform: XForm) {
        self.alignment = Some(xform);
    }

    pub fn has_shared_alignment(&self) -> bool {
        self.alignment.is_some()
    }

    /// Holes mapped into the alignment frame
    pub fn aligned_holes(&self) -> Vec<Hole> {
        let xform = self.alignment_transform();
        self.holes.iter().map(|h| h.transformed(&xform)).collect()
    }

    /// Closed star outline mapped into the alignment frame
    pub fn aligned_outline(&self) -> Vec<Point> {
        let xform = self.alignment_transform();
        self.star
            .outline()
            .iter()
            .map(|p| xform.transform_point(p))
            .collect()
    }
}

fn checked_holes_per_edge(holes_per_edge: i64) -> Result<usize> {
    if holes_per_edge < 1 {
        return Err(StarError::InvalidGeometryParameter {
            name: "holes_per_edge",
            value: holes_per_edge as f64,
            reason: "a layer needs at least one hole per edge",
        });
    }
    if holes_per_edge as u64 > MAX_HOLES_PER_EDGE as u64 {
        return Err(StarError::InvalidGeometryParameter {
            name: "hole_spacing",
            value: holes_per_edge as f64,
            reason: "spacing puts too many holes on one edge",
        });
    }
    Ok(holes_per_edge as usize)
}

fn place_holes(
    star: &Star,
    diameter: f64,
    holes_per_edge: usize,
    hole_count_start: usize,
) -> Vec<Hole> {
    let interior = holes_per_edge - 1;
    let mut centers: Vec<(Point, bool)> = Vec::with_capacity(10 * holes_per_edge);

    for (start, end) in star.edges() {
        centers.push((start, true));
        centers.extend(
            evenly_space_points(&start, &end, interior, true)
                .into_iter()
                .map(|p| (p, false)),
        );
    }

    centers
        .into_iter()
        .enumerate()
        .map(|(ix, (center, is_vertex))| Hole {
            center,
            diameter,
            is_vertex,
            number: hole_count_start + ix + 1,
        })
        .collect()
}
