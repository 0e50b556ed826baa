use pixel_star::export::{
    self, ExportFormat, layer_polyline_models_to_string, pixel_star_to_dxf, pixel_star_to_svg,
    star_model_to_string,
};
use pixel_star::{HoleFormat, PixelStar, StarParameters};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::fs;

fn sample_star(draw_border: bool) -> PixelStar {
    StarParameters {
        width: 72.0,
        hole_spacing: 1.5,
        row_count: 3,
        row_spacing: 5.0,
        draw_border,
        ..StarParameters::default()
    }
    .build()
    .unwrap()
}

fn attributes(el: &BytesStart) -> HashMap<String, String> {
    el.attributes()
        .map(|a| {
            let a = a.unwrap();
            (
                String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                String::from_utf8_lossy(&a.value).into_owned(),
            )
        })
        .collect()
}

fn f6(v: f64) -> String {
    format!("{:.6}", if v == 0.0 { 0.0 } else { v })
}

/// Every element with the given name, as attribute maps
fn elements(xml: &str, name: &str) -> Vec<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut found = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == name.as_bytes() => {
                found.push(attributes(&e));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    found
}

/// Values following each occurrence of a DXF group code
fn group_values<'a>(dxf: &'a str, code: &str) -> Vec<&'a str> {
    let lines: Vec<&str> = dxf.lines().collect();
    lines
        .chunks(2)
        .filter(|pair| pair.len() == 2 && pair[0] == code)
        .map(|pair| pair[1])
        .collect()
}

#[test]
fn test_dxf_has_one_circle_per_hole() {
    let star = sample_star(true);
    let dxf = pixel_star_to_dxf(&star);
    let entities = group_values(&dxf, "0");
    assert_eq!(entities.iter().filter(|e| **e == "CIRCLE").count(), 420);
    assert_eq!(entities.iter().filter(|e| **e == "LINE").count(), 10);
    assert_eq!(entities.last(), Some(&"EOF"));
    assert!(dxf.contains("\n$ACADVER\n1\nAC1006\n"));
}

#[test]
fn test_dxf_without_border_has_no_lines() {
    let dxf = pixel_star_to_dxf(&sample_star(false));
    let entities = group_values(&dxf, "0");
    assert_eq!(entities.iter().filter(|e| **e == "LINE").count(), 0);
    assert_eq!(entities.iter().filter(|e| **e == "CIRCLE").count(), 420);
}

#[test]
fn test_dxf_coordinates_inside_extent() {
    let star = sample_star(true);
    let dxf = pixel_star_to_dxf(&star);
    let bounds = star.aligned_bounding_box();
    let xs: Vec<f64> = group_values(&dxf, "10")
        .iter()
        .map(|v| v.parse().unwrap())
        .collect();
    let ys: Vec<f64> = group_values(&dxf, "20")
        .iter()
        .map(|v| v.parse().unwrap())
        .collect();
    assert!(xs.iter().all(|x| *x >= -1e-3 && *x <= bounds.max_x + 1e-3));
    assert!(ys.iter().all(|y| *y >= -1e-3 && *y <= bounds.max_y + 1e-3));
}

#[test]
fn test_svg_parses_with_expected_size() {
    let star = sample_star(true);
    let svg = pixel_star_to_svg(&star);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    // 96 user units per inch
    assert!((tree.size().width() - 72.0 * 96.0).abs() < 1.0);
    assert!(tree.size().height() > 0.0);
}

#[test]
fn test_svg_content_follows_flags() {
    let star = StarParameters {
        row_count: 2,
        label_holes: false,
        draw_inner_outlines: false,
        hole_format: HoleFormat::Solid,
        ..StarParameters::default()
    }
    .build()
    .unwrap();
    let svg = pixel_star_to_svg(&star);
    assert_eq!(svg.matches("<circle").count(), star.total_holes());
    assert_eq!(svg.matches("<text").count(), 0);
    // border only
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains("fill:#000000"));
    assert!(svg.contains("<g id=\"layer-2\">"));
}

#[test]
fn test_svg_labels_every_hole() {
    let star = sample_star(true);
    let svg = pixel_star_to_svg(&star);
    assert_eq!(svg.matches("<text").count(), 420);
    assert!(svg.contains(">420</text>"));
}

#[test]
fn test_polyline_models_one_per_layer() {
    let star = sample_star(true);
    let xml = layer_polyline_models_to_string(&star).unwrap();
    let models = elements(&xml, "model");
    assert_eq!(models.len(), 3);

    for (ix, (model, layer)) in models.iter().zip(star.layers()).enumerate() {
        assert_eq!(model["name"], format!("Star_layer_{}", ix + 1));
        assert_eq!(model["DisplayAs"], "Poly Line");
        let nodes = layer.holes_per_edge() + 1;
        assert_eq!(model["Seg1"], nodes.to_string());
        assert_eq!(model["Seg10"], nodes.to_string());
        assert_eq!(model["parm2"], (nodes * 10).to_string());
        assert_eq!(model["NumPoints"], "11");

        let first = layer.vertex_holes()[0].center;
        let expected = format!("{},{},0.000000", f6(first.x), f6(first.y));
        assert!(model["PointData"].starts_with(&expected));
        assert!(model["PointData"].ends_with(&expected));
    }
}

#[test]
fn test_star_model_attributes() {
    let star = sample_star(true);
    let xml = star_model_to_string(&star, "Front Star").unwrap();
    let models = elements(&xml, "starmodel");
    assert_eq!(models.len(), 1);
    let model = &models[0];
    assert_eq!(model["name"], "Front Star");
    assert_eq!(model["parm2"], "420");
    assert_eq!(model["parm3"], "5");
    assert_eq!(model["starSizes"], "150,140,130");
    assert_eq!(model["starRatio"], "2.0755");
    assert_eq!(model["DisplayAs"], "Star");
    assert_eq!(model["SourceVersion"], "2019.7");
}

#[test]
fn test_save_writes_every_format() {
    let star = sample_star(true);
    let dir = tempfile::tempdir().unwrap();
    for format in [
        ExportFormat::Dxf,
        ExportFormat::Svg,
        ExportFormat::XLightsPolylines,
        ExportFormat::XLightsStarModel,
    ] {
        let path = dir.path().join(format!("star.{}", format.extension()));
        export::save(&star, format, &path, "Star").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.is_empty(), "{:?} wrote nothing", format);
    }
    let dxf = fs::read_to_string(dir.path().join("star.dxf")).unwrap();
    assert_eq!(dxf, pixel_star_to_dxf(&star));
}

#[test]
fn test_dxf_top_point_is_highest() {
    let star = sample_star(true);
    let dxf = pixel_star_to_dxf(&star);
    let lines: Vec<&str> = dxf.lines().collect();
    let pairs: Vec<(&str, &str)> = lines.chunks(2).map(|p| (p[0], p[1])).collect();

    // First border LINE starts at the star's top point
    let first_line = pairs
        .iter()
        .position(|p| *p == ("0", "LINE"))
        .unwrap();
    let start_y: f64 = pairs[first_line..]
        .iter()
        .find(|p| p.0 == "20")
        .unwrap()
        .1
        .parse()
        .unwrap();

    let max_y = group_values(&dxf, "20")
        .iter()
        .map(|v| v.parse::<f64>().unwrap())
        .fold(f64::MIN, f64::max);
    assert!((start_y - max_y).abs() < 1e-3);
    assert!((start_y - star.aligned_bounding_box().max_y).abs() < 1e-3);
}
