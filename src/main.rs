use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pixel_star::export::{self, ExportFormat};
use pixel_star::params::{find_preset, load_presets, save_presets, upsert_preset};
use pixel_star::{HoleFormat, PixelStar, StarParameters, Units, init_logging};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "pixel-star",
    version,
    about = "Lay out pixel star hole patterns and export them as DXF, SVG or xLights models"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    star: StarArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the layer table
    Info,
    /// Write a DXF drawing
    Dxf { output: PathBuf },
    /// Write an SVG drawing
    Svg { output: PathBuf },
    /// Write one xLights poly line model per layer
    Xlights { output: PathBuf },
    /// Write an xLights star model
    Xmodel {
        output: PathBuf,
        #[arg(long, default_value = "PixelStar")]
        name: String,
    },
    /// Manage the preset file
    Preset(PresetCommand),
}

#[derive(Args, Debug)]
struct PresetCommand {
    #[command(subcommand)]
    command: PresetSubcommand,
}

#[derive(Subcommand, Debug)]
enum PresetSubcommand {
    /// Store the current parameters under NAME
    Save { name: String },
    /// List stored preset names
    List,
}

/// Star parameters; anything left unset comes from the preset or the defaults
#[derive(Args, Debug)]
struct StarArgs {
    /// Seed parameters from this named preset
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Preset file
    #[arg(long, global = true, default_value = "presets.json")]
    presets: PathBuf,

    #[arg(long, global = true)]
    units: Option<UnitsArg>,

    /// Overall star width
    #[arg(long, global = true)]
    width: Option<f64>,

    /// Outer to inner pentagon width ratio
    #[arg(long, global = true)]
    ratio: Option<f64>,

    #[arg(long, global = true)]
    hole_diameter: Option<f64>,

    #[arg(long, global = true)]
    pixel_body_diameter: Option<f64>,

    /// Requested spacing between holes on the outermost layer
    #[arg(long, global = true)]
    hole_spacing: Option<f64>,

    #[arg(long, global = true)]
    rows: Option<usize>,

    /// Width reduction between layers
    #[arg(long, global = true)]
    row_spacing: Option<f64>,

    #[arg(long, global = true)]
    border: Option<bool>,

    #[arg(long, global = true)]
    inner_outlines: Option<bool>,

    #[arg(long, global = true)]
    labels: Option<bool>,

    #[arg(long, global = true)]
    pixel_bodies: Option<bool>,

    #[arg(long, global = true)]
    hole_format: Option<HoleFormatArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum UnitsArg {
    In,
    Mm,
    Pt,
}

impl From<UnitsArg> for Units {
    fn from(u: UnitsArg) -> Self {
        match u {
            UnitsArg::In => Units::Inches,
            UnitsArg::Mm => Units::Millimeters,
            UnitsArg::Pt => Units::Points,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum HoleFormatArg {
    Outline,
    Solid,
    Target,
}

impl From<HoleFormatArg> for HoleFormat {
    fn from(f: HoleFormatArg) -> Self {
        match f {
            HoleFormatArg::Outline => HoleFormat::Outline,
            HoleFormatArg::Solid => HoleFormat::Solid,
            HoleFormatArg::Target => HoleFormat::OutlineTarget,
        }
    }
}

impl StarArgs {
    /// Preset (or defaults) with every given flag applied on top
    fn resolve(&self) -> anyhow::Result<StarParameters> {
        let mut params = match &self.preset {
            Some(name) => {
                let presets = load_presets(&self.presets).with_context(|| {
                    format!("Failed to read presets from '{}'", self.presets.display())
                })?;
                match find_preset(&presets, name) {
                    Some(p) => p.clone(),
                    None => bail!(
                        "No preset named '{}' in '{}'",
                        name,
                        self.presets.display()
                    ),
                }
            }
            None => StarParameters::default(),
        };

        if let Some(v) = self.units {
            params.units = v.into();
        }
        if let Some(v) = self.width {
            params.width = v;
        }
        if let Some(v) = self.ratio {
            params.ratio = v;
        }
        if let Some(v) = self.hole_diameter {
            params.hole_diameter = v;
        }
        if let Some(v) = self.pixel_body_diameter {
            params.pixel_body_diameter = v;
        }
        if let Some(v) = self.hole_spacing {
            params.hole_spacing = v;
        }
        if let Some(v) = self.rows {
            params.row_count = v;
        }
        if let Some(v) = self.row_spacing {
            params.row_spacing = v;
        }
        if let Some(v) = self.border {
            params.draw_border = v;
        }
        if let Some(v) = self.inner_outlines {
            params.draw_inner_outlines = v;
        }
        if let Some(v) = self.labels {
            params.label_holes = v;
        }
        if let Some(v) = self.pixel_bodies {
            params.show_pixel_bodies = v;
        }
        if let Some(v) = self.hole_format {
            params.hole_format = v.into();
        }

        debug!(?params, "resolved star parameters");
        Ok(params)
    }
}

fn print_layer_table(star: &PixelStar) {
    let units = star.parameters().units;
    println!(
        "Pixel star: {} x {} {}, {} layers",
        star.width_ceil(),
        star.height_ceil(),
        units,
        star.layers().len()
    );
    println!(
        "{:>5} {:>10} {:>10} {:>8} {:>8} {:>10}",
        "layer", "width", "holes/edge", "pixels", "first", "spacing"
    );
    for (ix, layer) in star.layers().iter().enumerate() {
        println!(
            "{:>5} {:>10.3} {:>10} {:>8} {:>8} {:>10.4}",
            ix + 1,
            layer.star().outer_width(),
            layer.holes_per_edge(),
            layer.pixel_count(),
            layer.hole_count_start() + 1,
            layer.actual_hole_spacing()
        );
    }
    println!("Total pixels: {}", star.total_holes());
}

fn write_output(
    star: &PixelStar,
    format: ExportFormat,
    output: &Path,
    name: &str,
) -> anyhow::Result<()> {
    export::save(star, format, output, name).with_context(|| {
        format!(
            "Failed to write {} output to '{}'",
            format.extension(),
            output.display()
        )
    })?;
    println!("Wrote '{}'", output.display());
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let params = cli.star.resolve()?;

    if let Command::Preset(PresetCommand { command }) = &cli.command {
        let path = &cli.star.presets;
        let mut presets = load_presets(path)
            .with_context(|| format!("Failed to read presets from '{}'", path.display()))?;
        match command {
            PresetSubcommand::Save { name } => {
                // Refuse to store a star that cannot be built
                params.validate()?;
                upsert_preset(
                    &mut presets,
                    StarParameters {
                        name: name.clone(),
                        ..params
                    },
                );
                save_presets(path, &presets)
                    .with_context(|| format!("Failed to write presets to '{}'", path.display()))?;
                println!("Saved preset '{}' to '{}'", name, path.display());
            }
            PresetSubcommand::List => {
                for p in &presets {
                    println!("{}", p.name);
                }
            }
        }
        return Ok(());
    }

    let star = params.build().context("Failed to build pixel star")?;
    info!(
        layers = star.layers().len(),
        total_holes = star.total_holes(),
        "pixel star ready"
    );

    match &cli.command {
        Command::Info => print_layer_table(&star),
        Command::Dxf { output } => write_output(&star, ExportFormat::Dxf, output, "")?,
        Command::Svg { output } => write_output(&star, ExportFormat::Svg, output, "")?,
        Command::Xlights { output } => {
            write_output(&star, ExportFormat::XLightsPolylines, output, "")?
        }
        Command::Xmodel { output, name } => {
            write_output(&star, ExportFormat::XLightsStarModel, output, name)?
        }
        Command::Preset(_) => {}
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
