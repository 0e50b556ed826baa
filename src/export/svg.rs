use std::io::Write;
use tracing::debug;

use super::style::{hole_style, outline_style, pixel_body_style, stroke_width};
use crate::error::Result;
use crate::geometry::{PixelStar, StarLayer};
use crate::params::StarParameters;
use crate::types::{Hole, HoleFormat, Point};

/// Format a number with 6 decimal places, treating -0 as 0
fn f(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{:.6}", n)
}

/// SVG path data for a closed polygon
fn polygon_path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (ix, p) in points.iter().enumerate() {
        let cmd = if ix == 0 { "M" } else { " L" };
        d.push_str(&format!("{}{},{}", cmd, f(p.x), f(p.y)));
    }
    if !d.is_empty() {
        d.push('Z');
    }
    d
}

fn hole_elements(hole: &Hole, params: &StarParameters, stroke: f64, out: &mut Vec<String>) {
    let c = hole.center;
    let r = hole.radius();

    // Match attribute order: cx, cy, r, style
    out.push(format!(
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" style=\"{}\"/>",
        f(c.x),
        f(c.y),
        f(r),
        hole_style(params.hole_format, stroke)
    ));

    if params.hole_format == HoleFormat::OutlineTarget {
        let line = outline_style(stroke);
        out.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"{}\"/>",
            f(c.x),
            f(c.y - r),
            f(c.x),
            f(c.y + r),
            line
        ));
        out.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"{}\"/>",
            f(c.x - r),
            f(c.y),
            f(c.x + r),
            f(c.y),
            line
        ));
    }

    if params.show_pixel_bodies && params.pixel_body_diameter > 0.0 {
        out.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" style=\"{}\"/>",
            f(c.x),
            f(c.y),
            f(params.pixel_body_diameter / 2.0),
            pixel_body_style(stroke)
        ));
    }

    if params.label_holes {
        // Labels sit at the hole's top-left corner
        let corner = hole.min_corner();
        out.push(format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\">{}</text>",
            f(corner.x),
            f(corner.y),
            f(hole.diameter * 0.6),
            hole.number
        ));
    }
}

fn layer_group(
    layer: &StarLayer,
    index: usize,
    params: &StarParameters,
    stroke: f64,
) -> String {
    let mut elements = Vec::new();

    if params.draw_inner_outlines {
        elements.push(format!(
            "<path d=\"{}\" style=\"{}\"/>",
            polygon_path_data(&layer.aligned_outline()),
            outline_style(stroke)
        ));
    }

    for hole in layer.aligned_holes() {
        hole_elements(&hole, params, stroke, &mut elements);
    }

    format!(
        "<g id=\"layer-{}\">\n        {}\n    </g>",
        index + 1,
        elements.join("\n        ")
    )
}

/// Convert a pixel star to an SVG document in the shared drawing frame
pub fn pixel_star_to_svg(star: &PixelStar) -> String {
    let params = star.parameters();
    let bounds = star.aligned_bounding_box();
    let stroke = stroke_width(bounds.width());
    let xform = star.alignment_transform();

    let mut groups: Vec<String> = Vec::new();

    if let Some(border) = star.border() {
        let outline: Vec<Point> = border
            .outline()
            .iter()
            .map(|p| xform.transform_point(p))
            .collect();
        groups.push(format!(
            "<g id=\"border\">\n        <path d=\"{}\" style=\"{}\"/>\n    </g>",
            polygon_path_data(&outline),
            outline_style(stroke)
        ));
    }

    for (ix, layer) in star.layers().iter().enumerate() {
        groups.push(layer_group(layer, ix, params, stroke));
    }

    let unit = params.units.svg_suffix();
    let w = bounds.width();
    let h = bounds.height();
    debug!(width = w, height = h, groups = groups.len(), "rendered svg");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}{}" height="{}{}" viewBox="{} {} {} {}">
    {}
</svg>"#,
        f(w),
        unit,
        f(h),
        unit,
        f(bounds.min_x),
        f(bounds.min_y),
        f(w),
        f(h),
        groups.join("\n    ")
    )
}

pub fn write_svg<W: Write>(star: &PixelStar, mut writer: W) -> Result<()> {
    writer.write_all(pixel_star_to_svg(star).as_bytes())?;
    Ok(())
}
