//! ASCII DXF export
//!
//! Emits an R12-era drawing with two layers: `Border` holds one `LINE` per
//! border edge and `Holes` holds one `CIRCLE` per hole. Coordinates are in the
//! shared drawing frame with the y axis flipped, since DXF runs y upwards.

use std::io::Write;
use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::PixelStar;
use crate::types::{Point, XForm};

const HOLES_LAYER: &str = "Holes";
const BORDER_LAYER: &str = "Border";

/// Format a coordinate with 4 decimal places, treating -0 as 0
fn f(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{:.4}", n)
}

/// Append one group code / value pair
fn pair(out: &mut String, code: u16, value: &str) {
    out.push_str(&code.to_string());
    out.push('\n');
    out.push_str(value);
    out.push('\n');
}

fn circle(out: &mut String, center: &Point, radius: f64) {
    pair(out, 0, "CIRCLE");
    pair(out, 8, HOLES_LAYER);
    pair(out, 10, &f(center.x));
    pair(out, 20, &f(center.y));
    pair(out, 40, &f(radius));
    pair(out, 62, "0");
}

fn line(out: &mut String, start: &Point, end: &Point) {
    pair(out, 0, "LINE");
    pair(out, 8, BORDER_LAYER);
    pair(out, 10, &f(start.x));
    pair(out, 20, &f(start.y));
    pair(out, 11, &f(end.x));
    pair(out, 21, &f(end.y));
    pair(out, 62, "0");
}

fn layer_entry(out: &mut String, name: &str) {
    pair(out, 0, "LAYER");
    pair(out, 2, name);
    pair(out, 70, "64");
    pair(out, 62, "7");
    pair(out, 6, "CONTINUOUS");
}

fn header(out: &mut String, units: u8, extent: &Point) {
    pair(out, 999, "DXF created by pixel-star");
    pair(out, 0, "SECTION");
    pair(out, 2, "HEADER");
    pair(out, 9, "$ACADVER");
    pair(out, 1, "AC1006");
    pair(out, 9, "$INSUNITS");
    pair(out, 70, &units.to_string());
    pair(out, 9, "$INSBASE");
    pair(out, 10, "0.0");
    pair(out, 20, "0.0");
    pair(out, 30, "0.0");
    pair(out, 9, "$EXTMIN");
    pair(out, 10, "0.0");
    pair(out, 20, "0.0");
    pair(out, 9, "$EXTMAX");
    pair(out, 10, &f(extent.x));
    pair(out, 20, &f(extent.y));
    pair(out, 0, "ENDSEC");
}

fn tables(out: &mut String) {
    pair(out, 0, "SECTION");
    pair(out, 2, "TABLES");

    pair(out, 0, "TABLE");
    pair(out, 2, "LTYPE");
    pair(out, 70, "1");
    pair(out, 0, "LTYPE");
    pair(out, 2, "CONTINUOUS");
    pair(out, 70, "64");
    pair(out, 3, "Solid line");
    pair(out, 72, "65");
    pair(out, 73, "0");
    pair(out, 40, "0.000000");
    pair(out, 0, "ENDTAB");

    pair(out, 0, "TABLE");
    pair(out, 2, "LAYER");
    pair(out, 70, "2");
    layer_entry(out, HOLES_LAYER);
    layer_entry(out, BORDER_LAYER);
    pair(out, 0, "ENDTAB");

    pair(out, 0, "TABLE");
    pair(out, 2, "STYLE");
    pair(out, 70, "0");
    pair(out, 0, "ENDTAB");

    pair(out, 0, "ENDSEC");
}

/// Convert a pixel star to DXF text
pub fn pixel_star_to_dxf(star: &PixelStar) -> String {
    let bounds = star.aligned_bounding_box();
    // Shared frame first, then mirror about the horizontal so the top point
    // stays on top in a y-up drawing.
    let to_cad = XForm {
        d: -1.0,
        f: bounds.max_y + bounds.min_y,
        ..XForm::identity()
    }
    .compose(&star.alignment_transform());

    let mut out = String::new();
    header(
        &mut out,
        star.parameters().units.dxf_code(),
        &Point::new(bounds.max_x, bounds.max_y),
    );
    tables(&mut out);

    pair(&mut out, 0, "SECTION");
    pair(&mut out, 2, "ENTITIES");

    match star.border() {
        Some(border) => {
            for (start, end) in border.edges() {
                line(
                    &mut out,
                    &to_cad.transform_point(&start),
                    &to_cad.transform_point(&end),
                );
            }
        }
        None => warn!("pixel star has no border, DXF will only contain holes"),
    }

    let mut circles = 0usize;
    for hole in star.holes() {
        circle(&mut out, &to_cad.transform_point(&hole.center), hole.radius());
        circles += 1;
    }

    pair(&mut out, 0, "ENDSEC");
    pair(&mut out, 0, "EOF");

    debug!(circles, "rendered dxf");
    out
}

pub fn write_dxf<W: Write>(star: &PixelStar, mut writer: W) -> Result<()> {
    writer.write_all(pixel_star_to_dxf(star).as_bytes())?;
    Ok(())
}
