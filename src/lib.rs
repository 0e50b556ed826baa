//! # pixel-star
//!
//! Geometry and drawing exports for pixel stars: five point star props with
//! concentric rows of holes for bullet pixels.
//!
//! ## Features
//!
//! - **Geometry**: pentagon, star outline, hole layers and the nested pixel star
//! - **DXF / SVG**: drawings of the border and holes for cutting or printing
//! - **xLights**: per-layer poly line models and a star `.xmodel`
//! - **Presets**: named parameter sets stored as JSON
//!
//! ## Example
//!
//! ```rust,ignore
//! use pixel_star::{StarParameters, export};
//!
//! let star = StarParameters::default().build().unwrap();
//! println!("{} holes", star.total_holes());
//! std::fs::write("star.dxf", export::pixel_star_to_dxf(&star)).unwrap();
//! ```

pub mod bounds;
pub mod error;
pub mod export;
pub mod geometry;
pub mod params;
pub mod types;

// Re-export commonly used items
pub use bounds::Bounds;
pub use error::{Result, StarError};
pub use geometry::{DEFAULT_OUTER_TO_INNER_RATIO, Pentagon, PixelStar, Star, StarLayer};
pub use params::{StarParameters, Units, load_presets, save_presets, upsert_preset};
pub use types::{Hole, HoleFormat, Point, XForm};

/// Install a `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `info` is used, or `debug` when
/// `verbose` is set.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
