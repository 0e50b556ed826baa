//! Star geometry engine
//!
//! Builds the nested star outlines of a pixel star and places the pixel
//! holes along their edges:
//!
//! 1. [`Pentagon`] - five vertices of a regular pentagon about the origin
//! 2. [`Star`] - two opposed pentagons interleaved into a ten point outline
//! 3. [`StarLayer`] - one star outline with holes spaced along every edge
//! 4. [`PixelStar`] - an optional border plus concentric layers sharing one
//!    drawing frame

mod layer;
mod pentagon;
mod pixel_star;
mod star;

pub use layer::StarLayer;
pub use pentagon::Pentagon;
pub use pixel_star::PixelStar;
pub use star::{DEFAULT_OUTER_TO_INNER_RATIO, Star};

use crate::types::Point;

/// Interpolate `count` points strictly between `start` and `end`, splitting
/// the segment into `count + 1` equal parts.
///
/// Points are computed from the far end backwards (the first computed point
/// sits next to `end`). With `reversed` set, the result is flipped so it reads
/// from `start` towards `end`, which is the order holes are numbered in.
pub fn evenly_space_points(start: &Point, end: &Point, count: usize, reversed: bool) -> Vec<Point> {
    let divisions = (count + 1) as f64;
    let mut points: Vec<Point> = (1..=count)
        .map(|ix| {
            let offset = (count + 1 - ix) as f64 / divisions;
            start.lerp(end, offset)
        })
        .collect();

    if reversed {
        points.reverse();
    }
    points
}

/// Close a polygon by repeating its first point at the end
pub fn closed_loop(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    if let Some(first) = points.first() {
        out.push(*first);
    }
    out
}
