//! xLights model export
//!
//! Two shapes of model are produced:
//!
//! - a `<models>` fragment holding one "Poly Line" model per star layer, with
//!   one segment per star edge, ready to merge into an xLights layout
//! - a standalone `.xmodel` star model sized from the per-layer hole counts

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::io::Write;
use tracing::debug;

use crate::error::Result;
use crate::geometry::{PixelStar, StarLayer};

/// xLights release the star model attributes were taken from
const SOURCE_VERSION: &str = "2019.7";

const EDGES: usize = 10;

fn f6(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{:.6}", n)
}

fn f4(n: f64) -> String {
    format!("{:.4}", n)
}

/// `x,y,0` triples for each star vertex, closed back to the first
fn polyline_point_data(layer: &StarLayer) -> String {
    let vertices = layer.vertex_holes();
    vertices
        .iter()
        .chain(vertices.first())
        .flat_map(|h| [f6(h.center.x), f6(h.center.y), f6(0.0)])
        .collect::<Vec<_>>()
        .join(",")
}

/// The "Poly Line" model element for one layer; `layer_number` is 1-based
pub fn layer_polyline_element(layer: &StarLayer, layer_number: usize) -> BytesStart<'static> {
    // Nodes on an edge, counting both end vertices
    let nodes_per_edge = layer.holes_per_edge() + 1;

    let mut el = BytesStart::new("model");
    el.push_attribute(("DisplayAs", "Poly Line"));
    el.push_attribute(("StringType", "RGB Nodes"));
    el.push_attribute(("StartSide", "B"));
    el.push_attribute(("Dir", "L"));
    el.push_attribute(("Antialias", "1"));
    el.push_attribute(("PixelSize", "2"));
    el.push_attribute(("Transparency", "0"));
    el.push_attribute(("LayoutGroup", "Default"));
    el.push_attribute(("name", format!("Star_layer_{}", layer_number).as_str()));
    el.push_attribute(("description", "Pixel star layer"));
    el.push_attribute(("IndivSegs", "1"));
    for side in 1..=EDGES {
        el.push_attribute((
            format!("Seg{}", side).as_str(),
            nodes_per_edge.to_string().as_str(),
        ));
    }
    for attr in ["WorldPosX", "WorldPosY", "WorldPosZ"] {
        el.push_attribute((attr, f6(0.0).as_str()));
    }
    for attr in ["ScaleX", "ScaleY", "ScaleZ"] {
        el.push_attribute((attr, f6(1.0).as_str()));
    }
    el.push_attribute(("parm1", "1"));
    el.push_attribute(("parm2", (nodes_per_edge * EDGES).to_string().as_str()));
    el.push_attribute(("parm3", "1"));
    el.push_attribute(("NumPoints", (EDGES + 1).to_string().as_str()));
    el.push_attribute(("PointData", polyline_point_data(layer).as_str()));
    el.push_attribute(("cPointData", ""));
    el.push_attribute(("versionNumber", "3"));
    el
}

/// Write a `<models>` document with one poly line model per layer
pub fn write_layer_polyline_models<W: Write>(star: &PixelStar, writer: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(writer, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("models")))?;
    for (ix, layer) in star.layers().iter().enumerate() {
        writer.write_event(Event::Empty(layer_polyline_element(layer, ix + 1)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("models")))?;
    debug!(models = star.layers().len(), "wrote xLights poly line models");
    Ok(())
}

pub fn layer_polyline_models_to_string(star: &PixelStar) -> Result<String> {
    let mut buf = Vec::new();
    write_layer_polyline_models(star, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// The `starmodel` element describing the whole star
pub fn star_model_element(star: &PixelStar, name: &str) -> BytesStart<'static> {
    let star_sizes = star
        .layers()
        .iter()
        .map(|l| l.pixel_count().to_string())
        .collect::<Vec<_>>()
        .join(",");

    let mut el = BytesStart::new("starmodel");
    el.push_attribute(("name", name));
    el.push_attribute(("parm1", "1"));
    el.push_attribute(("parm2", star.total_holes().to_string().as_str()));
    el.push_attribute(("parm3", "5"));
    el.push_attribute(("DisplayAs", "Star"));
    el.push_attribute(("StringType", "RGB Nodes"));
    el.push_attribute(("Transparency", "0"));
    el.push_attribute(("PixelSize", "2"));
    el.push_attribute(("ModelBrightness", ""));
    el.push_attribute(("Antialias", "1"));
    el.push_attribute(("StartSide", "B"));
    el.push_attribute(("starSizes", star_sizes.as_str()));
    el.push_attribute(("starRatio", f4(star.ratio()).as_str()));
    el.push_attribute(("Dir", "L"));
    el.push_attribute(("StrandNames", ""));
    el.push_attribute(("NodeNames", ""));
    el.push_attribute(("SourceVersion", SOURCE_VERSION));
    el
}

/// Write a standalone `.xmodel` document for the star
pub fn write_star_model<W: Write>(star: &PixelStar, name: &str, writer: W) -> Result<()> {
    let mut writer = Writer::new(writer);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Empty(star_model_element(star, name)))?;
    debug!(name, total_holes = star.total_holes(), "wrote xLights star model");
    Ok(())
}

pub fn star_model_to_string(star: &PixelStar, name: &str) -> Result<String> {
    let mut buf = Vec::new();
    write_star_model(star, name, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
