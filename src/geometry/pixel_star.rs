use tracing::{debug, info};

use super::{Star, StarLayer};
use crate::bounds::Bounds;
use crate::error::{Result, StarError};
use crate::params::StarParameters;
use crate::types::{Hole, XForm};

/// A complete pixel star: an optional border and concentric hole layers.
///
/// Layer 0 is the outermost. Its hole count comes from the hole spacing; every
/// following layer has one hole fewer per edge, and its holes are numbered on
/// from where the previous layer stopped. All layers share a single alignment
/// frame, taken from the border when one is drawn and from layer 0 otherwise.
#[derive(Debug, Clone)]
pub struct PixelStar {
    params: StarParameters,
    border: Option<Star>,
    layers: Vec<StarLayer>,
    total_holes: usize,
    alignment: XForm,
}

impl PixelStar {
    pub fn new(params: &StarParameters) -> Result<Self> {
        params.validate()?;

        let border = if params.draw_border {
            Some(Star::with_ratio(params.width, params.ratio)?)
        } else {
            None
        };

        // The border keeps one row spacing of clearance to the first layer.
        let first_layer_width = if border.is_some() {
            params.width - params.row_spacing
        } else {
            params.width
        };

        let (mut layers, total_holes) = build_layers(params, first_layer_width)?;

        let alignment = match &border {
            Some(star) => star.alignment_transform(),
            None => layers[0].alignment_transform(),
        };
        for layer in &mut layers {
            layer.set_alignment_transform(alignment);
        }

        info!(
            layers = layers.len(),
            total_holes,
            border = border.is_some(),
            "built pixel star"
        );

        Ok(Self {
            params: params.clone(),
            border,
            layers,
            total_holes,
            alignment,
        })
    }

    pub fn parameters(&self) -> &StarParameters {
        &self.params
    }

    pub fn ratio(&self) -> f64 {
        self.params.ratio
    }

    pub fn border(&self) -> Option<&Star> {
        self.border.as_ref()
    }

    pub fn layers(&self) -> &[StarLayer] {
        &self.layers
    }

    pub fn total_holes(&self) -> usize {
        self.total_holes
    }

    /// Every hole of every layer, outermost layer first
    pub fn holes(&self) -> impl Iterator<Item = &Hole> {
        self.layers.iter().flat_map(|l| l.holes().iter())
    }

    /// The frame shared by the border and every layer
    pub fn alignment_transform(&self) -> XForm {
        self.alignment
    }

    /// The border's box when drawn, otherwise layer 0's
    pub fn bounding_box(&self) -> Bounds {
        match &self.border {
            Some(star) => star.bounding_box(),
            None => self.layers[0].bounding_box(),
        }
    }

    /// Overall box in the shared frame
    pub fn aligned_bounding_box(&self) -> Bounds {
        self.bounding_box().translated(&self.alignment)
    }

    /// Drawing width rounded up to whole units
    pub fn width_ceil(&self) -> u32 {
        self.bounding_box().width().ceil() as u32
    }

    /// Drawing height rounded up to whole units
    pub fn height_ceil(&self) -> u32 {
        self.bounding_box().height().ceil() as u32
    }
}

/// Build the layers in order, threading the previous hole count and the
/// running hole total through the fold.
fn build_layers(
    params: &StarParameters,
    first_layer_width: f64,
) -> Result<(Vec<StarLayer>, usize)> {
    let seed = (Vec::with_capacity(params.row_count), 0usize, None::<usize>);

    let (layers, total, _) = (0..params.row_count).try_fold(
        seed,
        |(mut layers, total, previous), ix| -> Result<_> {
            let width = first_layer_width - ix as f64 * params.row_spacing;
            let inherited = previous.map(|n| n as i64 - 1);

            if width <= 0.0 {
                return Err(StarError::GeometryExhausted {
                    layer: ix,
                    holes_per_edge: 0,
                });
            }

            let star = Star::with_ratio(width, params.ratio)?;
            let holes_per_edge = inherited
                .unwrap_or_else(|| StarLayer::derive_holes_per_edge(&star, params.hole_spacing));
            if holes_per_edge <= 0 {
                return Err(StarError::GeometryExhausted {
                    layer: ix,
                    holes_per_edge,
                });
            }

            let layer = StarLayer::from_star(
                star,
                params.hole_spacing,
                params.hole_diameter,
                holes_per_edge as usize,
                total,
            )?;
            debug!(
                layer = ix,
                width,
                holes_per_edge,
                pixels = layer.pixel_count(),
                actual_spacing = layer.actual_hole_spacing(),
                bounds = ?layer.bounding_box(),
                "placed star layer"
            );

            let total = total + layer.pixel_count();
            layers.push(layer);
            Ok((layers, total, Some(holes_per_edge as usize)))
        },
    )?;

    Ok((layers, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(rows: usize, border: bool) -> StarParameters {
        StarParameters {
            width: 72.0,
            hole_spacing: 1.5,
            hole_diameter: 0.5,
            row_count: rows,
            row_spacing: 5.0,
            draw_border: border,
            ..StarParameters::default()
        }
    }

    #[test]
    fn test_layer_widths_step_by_row_spacing() {
        let star = PixelStar::new(&params(3, true)).unwrap();
        let widths: Vec<f64> = star
            .layers()
            .iter()
            .map(|l| l.star().outer_width())
            .collect();
        assert_eq!(widths, vec![67.0, 62.0, 57.0]);
    }

    #[test]
    fn test_no_border_first_layer_uses_full_width() {
        let star = PixelStar::new(&params(2, false)).unwrap();
        assert!(star.border().is_none());
        assert_eq!(star.layers()[0].star().outer_width(), 72.0);
        assert_eq!(star.layers()[1].star().outer_width(), 67.0);
    }

    #[test]
    fn test_holes_taper_by_one_per_layer() {
        let star = PixelStar::new(&params(3, true)).unwrap();
        let counts: Vec<usize> = star.layers().iter().map(|l| l.holes_per_edge()).collect();
        assert_eq!(counts, vec![15, 14, 13]);
        assert_eq!(star.total_holes(), 420);
    }

    #[test]
    fn test_hole_count_start_is_running_total() {
        let star = PixelStar::new(&params(3, true)).unwrap();
        let starts: Vec<usize> = star.layers().iter().map(|l| l.hole_count_start()).collect();
        assert_eq!(starts, vec![0, 150, 290]);
        let numbers: Vec<usize> = star.holes().map(|h| h.number).collect();
        assert_eq!(numbers, (1..=420).collect::<Vec<_>>());
    }

    #[test]
    fn test_border_frame_shared_by_all_layers() {
        let star = PixelStar::new(&params(3, true)).unwrap();
        let frame = star.border().unwrap().alignment_transform();
        assert_eq!(star.alignment_transform(), frame);
        for layer in star.layers() {
            assert_eq!(layer.alignment_transform(), frame);
        }
    }

    #[test]
    fn test_layer_zero_frame_without_border() {
        let star = PixelStar::new(&params(3, false)).unwrap();
        let frame = star.layers()[0].bounding_box().alignment_transform();
        for layer in star.layers() {
            assert_eq!(layer.alignment_transform(), frame);
        }
    }

    #[test]
    fn test_exhaustion_is_an_error() {
        // 16 holes per edge on layer 0 cannot taper through 20 layers
        let mut p = params(20, true);
        p.row_spacing = 0.5;
        match PixelStar::new(&p) {
            Err(StarError::GeometryExhausted { layer, holes_per_edge }) => {
                assert_eq!(layer, 16);
                assert_eq!(holes_per_edge, 0);
            }
            other => panic!("expected exhaustion, got {:?}", other.map(|s| s.total_holes())),
        }
    }

    #[test]
    fn test_tiny_hole_spacing_is_rejected() {
        let mut p = params(1, true);
        p.hole_spacing = 1e-300;
        assert!(matches!(
            PixelStar::new(&p),
            Err(StarError::InvalidGeometryParameter {
                name: "hole_spacing",
                ..
            })
        ));
    }

    #[test]
    fn test_width_exhaustion_is_an_error() {
        let p = params(20, true);
        assert!(matches!(
            PixelStar::new(&p),
            Err(StarError::GeometryExhausted { layer: 14, .. })
        ));
    }

    #[test]
    fn test_zero_rows_rejected() {
        assert!(matches!(
            PixelStar::new(&params(0, true)),
            Err(StarError::InvalidGeometryParameter { name: "row_count", .. })
        ));
    }
}
