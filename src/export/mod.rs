//! Output formats for a built [`PixelStar`]
//!
//! - [`dxf`] - CAD drawing of the border and every hole, for CNC or laser work
//! - [`svg`] - printable drawing with outlines, labels and pixel bodies
//! - [`xlights`] - xLights models for sequencing the finished star

pub mod dxf;
pub mod style;
pub mod svg;
pub mod xlights;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::geometry::PixelStar;

pub use dxf::{pixel_star_to_dxf, write_dxf};
pub use svg::{pixel_star_to_svg, write_svg};
pub use xlights::{
    layer_polyline_models_to_string, star_model_to_string, write_layer_polyline_models,
    write_star_model,
};

/// Output format selector for [`save`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Dxf,
    Svg,
    XLightsPolylines,
    XLightsStarModel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Dxf => "dxf",
            ExportFormat::Svg => "svg",
            ExportFormat::XLightsPolylines => "xml",
            ExportFormat::XLightsStarModel => "xmodel",
        }
    }
}

/// Write the star to `path` in the given format.
///
/// `model_name` names the xLights star model and is ignored by the other
/// formats.
pub fn save(
    star: &PixelStar,
    format: ExportFormat,
    path: impl AsRef<Path>,
    model_name: &str,
) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Dxf => write_dxf(star, &mut out)?,
        ExportFormat::Svg => write_svg(star, &mut out)?,
        ExportFormat::XLightsPolylines => write_layer_polyline_models(star, &mut out)?,
        ExportFormat::XLightsStarModel => write_star_model(star, model_name, &mut out)?,
    }
    std::io::Write::flush(&mut out)?;
    info!(path = %path.display(), ?format, "exported pixel star");
    Ok(())
}
