//! Star configuration and named presets
//!
//! [`StarParameters`] holds every input needed to lay out a pixel star plus
//! the display flags the drawing exporters honor. Presets are stored as a JSON
//! array of parameter sets, keyed by name.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, StarError, require_positive};
use crate::geometry::{DEFAULT_OUTER_TO_INNER_RATIO, PixelStar};
use crate::types::HoleFormat;

/// 12 mm expressed in inches, the usual hole for a bullet pixel
pub const PIXEL_HOLE_IN_INCHES: f64 = 0.472441;

/// Drawing units the star dimensions are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Inches,
    Millimeters,
    Points,
}

impl Units {
    /// Unit suffix for SVG lengths
    pub fn svg_suffix(&self) -> &'static str {
        match self {
            Units::Inches => "in",
            Units::Millimeters => "mm",
            Units::Points => "pt",
        }
    }

    /// DXF `$INSUNITS` code (0 = unitless)
    pub fn dxf_code(&self) -> u8 {
        match self {
            Units::Inches => 1,
            Units::Millimeters => 4,
            Units::Points => 0,
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inches => write!(f, "inches"),
            Self::Millimeters => write!(f, "millimeters"),
            Self::Points => write!(f, "points"),
        }
    }
}

/// Everything needed to build and draw a pixel star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarParameters {
    /// Preset name
    pub name: String,
    pub units: Units,
    /// Overall star width (outer pentagon diagonal)
    pub width: f64,
    /// Outer to inner pentagon width ratio, must exceed 1
    pub ratio: f64,
    pub hole_diameter: f64,
    /// Diameter of the pixel body behind the hole (display only)
    pub pixel_body_diameter: f64,
    /// Requested spacing between holes on the outermost layer
    pub hole_spacing: f64,
    /// Number of concentric layers
    pub row_count: usize,
    /// Width reduction between consecutive layers
    pub row_spacing: f64,
    pub draw_border: bool,
    pub draw_inner_outlines: bool,
    pub label_holes: bool,
    pub show_pixel_bodies: bool,
    pub hole_format: HoleFormat,
}

impl Default for StarParameters {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            units: Units::Inches,
            width: 72.0,
            ratio: DEFAULT_OUTER_TO_INNER_RATIO,
            hole_diameter: PIXEL_HOLE_IN_INCHES,
            pixel_body_diameter: 0.0,
            hole_spacing: 1.5,
            row_count: 12,
            row_spacing: 5.0,
            draw_border: true,
            draw_inner_outlines: true,
            label_holes: true,
            show_pixel_bodies: false,
            hole_format: HoleFormat::Outline,
        }
    }
}

impl StarParameters {
    /// Reject parameter sets no star can be built from
    pub fn validate(&self) -> Result<()> {
        require_positive("width", self.width)?;
        if !(self.ratio > 1.0 && self.ratio.is_finite()) {
            return Err(StarError::InvalidGeometryParameter {
                name: "ratio",
                value: self.ratio,
                reason: "outer to inner ratio must be greater than 1",
            });
        }
        require_positive("hole_diameter", self.hole_diameter)?;
        require_positive("hole_spacing", self.hole_spacing)?;
        if self.row_count == 0 {
            return Err(StarError::InvalidGeometryParameter {
                name: "row_count",
                value: 0.0,
                reason: "at least one row is required",
            });
        }
        if !(self.row_spacing >= 0.0 && self.row_spacing.is_finite()) {
            return Err(StarError::InvalidGeometryParameter {
                name: "row_spacing",
                value: self.row_spacing,
                reason: "must be zero or a positive finite number",
            });
        }
        if !(self.pixel_body_diameter >= 0.0 && self.pixel_body_diameter.is_finite()) {
            return Err(StarError::InvalidGeometryParameter {
                name: "pixel_body_diameter",
                value: self.pixel_body_diameter,
                reason: "must be zero or a positive finite number",
            });
        }
        Ok(())
    }

    pub fn build(&self) -> Result<PixelStar> {
        PixelStar::new(self)
    }
}

/// Load presets from a JSON file; a missing file is an empty list
pub fn load_presets(path: impl AsRef<Path>) -> Result<Vec<StarParameters>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no preset file, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let presets: Vec<StarParameters> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = presets.len(), "loaded presets");
    Ok(presets)
}

pub fn save_presets(path: impl AsRef<Path>, presets: &[StarParameters]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(presets)?;
    fs::write(path, json)?;
    info!(path = %path.display(), count = presets.len(), "saved presets");
    Ok(())
}

pub fn find_preset<'a>(presets: &'a [StarParameters], name: &str) -> Option<&'a StarParameters> {
    presets.iter().find(|p| p.name == name)
}

/// Replace the preset with the same name, or append a new one
pub fn upsert_preset(presets: &mut Vec<StarParameters>, params: StarParameters) {
    match presets.iter_mut().find(|p| p.name == params.name) {
        Some(existing) => *existing = params,
        None => presets.push(params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(StarParameters::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        let bad = [
            StarParameters {
                width: 0.0,
                ..Default::default()
            },
            StarParameters {
                ratio: 1.0,
                ..Default::default()
            },
            StarParameters {
                row_count: 0,
                ..Default::default()
            },
            StarParameters {
                hole_spacing: -1.0,
                ..Default::default()
            },
            StarParameters {
                row_spacing: f64::NAN,
                ..Default::default()
            },
        ];
        for p in &bad {
            assert!(
                matches!(
                    p.validate(),
                    Err(StarError::InvalidGeometryParameter { .. })
                ),
                "{:?} should be rejected",
                p
            );
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let p: StarParameters =
            serde_json::from_str(r#"{"name":"small","width":24.0,"hole_format":"solid"}"#).unwrap();
        assert_eq!(p.name, "small");
        assert_eq!(p.width, 24.0);
        assert_eq!(p.hole_format, HoleFormat::Solid);
        assert_eq!(p.row_count, 12);
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut presets = vec![StarParameters::default()];
        upsert_preset(
            &mut presets,
            StarParameters {
                width: 48.0,
                ..Default::default()
            },
        );
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].width, 48.0);

        upsert_preset(
            &mut presets,
            StarParameters {
                name: "other".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(presets.len(), 2);
        assert!(find_preset(&presets, "other").is_some());
        assert!(find_preset(&presets, "missing").is_none());
    }

    #[test]
    fn test_units_codes() {
        assert_eq!(Units::Inches.dxf_code(), 1);
        assert_eq!(Units::Millimeters.svg_suffix(), "mm");
        assert_eq!(Units::Points.to_string(), "points");
    }
}
