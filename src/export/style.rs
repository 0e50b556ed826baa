use crate::types::HoleFormat;

/// Stroke color used for every drawn line
pub const STROKE_COLOR: &str = "#000000";

/// Stroke width as a fraction of the drawing width
const STROKE_FRACTION: f64 = 1.0 / 720.0;

/// Stroke width scaled to the drawing so lines stay visible at any size
pub fn stroke_width(drawing_width: f64) -> f64 {
    drawing_width * STROKE_FRACTION
}

/// SVG style string for a hole of the given format
pub fn hole_style(format: HoleFormat, stroke_width: f64) -> String {
    let fill = match format {
        HoleFormat::Solid => STROKE_COLOR,
        HoleFormat::Outline | HoleFormat::OutlineTarget => "#FFFFFF",
    };
    format!(
        "stroke:{};stroke-width:{:.6};fill:{}",
        STROKE_COLOR, stroke_width, fill
    )
}

/// SVG style string for star outlines
pub fn outline_style(stroke_width: f64) -> String {
    format!(
        "stroke:{};stroke-width:{:.6};fill:none",
        STROKE_COLOR, stroke_width
    )
}

/// Dashed outline for the pixel body drawn around a hole
pub fn pixel_body_style(stroke_width: f64) -> String {
    format!(
        "stroke:{};stroke-width:{:.6};stroke-dasharray:{:.6};fill:none",
        STROKE_COLOR,
        stroke_width,
        stroke_width * 9.0
    )
}
