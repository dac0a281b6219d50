mod config;
mod output;

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use log::{info, warn, LevelFilter};
use rampfx::{GradientMap, Rgba};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

use config::RampConfig;
use output::OutputFormat;

const DEFAULT_RESOLUTION: usize = 10;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with anchors, resolution and format
    #[arg(long)]
    config: Option<PathBuf>,
    /// Comma separated hex codes of the anchor colors
    #[arg(short, long)]
    colors: Option<String>,
    #[arg(short, long)]
    resolution: Option<usize>,
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
    /// Print only the color nearest to this fraction (repeatable). Fraction
    /// lookups print before index lookups
    #[arg(long = "at", allow_negative_numbers = true)]
    fractions: Vec<f64>,
    /// Print only the color at this index (repeatable). Index lookups print
    /// after fraction lookups
    #[arg(long = "index")]
    indices: Vec<usize>,
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug)]
struct Ramp {
    anchors: Vec<Rgba>,
    resolution: usize,
    format: OutputFormat,
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            Config::default(),
            File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

/// Merges the config file, if any, with command line flags. Flags win.
fn resolve(cli: &Cli) -> anyhow::Result<Ramp> {
    let file = match &cli.config {
        Some(path) => {
            info!("Loading ramp config from {}", path.display());
            RampConfig::from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
        None => RampConfig::default(),
    };

    let anchors = match &cli.colors {
        Some(list) => config::parse_anchor_list(list)?,
        None => file.anchor_colors()?,
    };

    Ok(Ramp {
        anchors,
        resolution: cli
            .resolution
            .or(file.resolution)
            .unwrap_or(DEFAULT_RESOLUTION),
        format: cli.format.or(file.format).unwrap_or_default(),
    })
}

/// Colors to print: the lookups if any were requested, the whole map otherwise.
/// Fraction lookups come first, then index lookups. Lookups that miss the map
/// print as fully transparent.
fn select(map: &GradientMap, fractions: &[f64], indices: &[usize]) -> Vec<Rgba> {
    if fractions.is_empty() && indices.is_empty() {
        return map.as_slice().to_vec();
    }

    let by_fraction = fractions.iter().map(|&fraction| {
        map.color_at(fraction).unwrap_or_else(|| {
            warn!("Fraction {} is outside of the gradient map", fraction);
            Rgba::CLEAR
        })
    });
    let by_index = indices.iter().map(|&index| {
        map.get(index).unwrap_or_else(|| {
            warn!(
                "Index {} is outside of the gradient map of {} colors",
                index,
                map.len()
            );
            Rgba::CLEAR
        })
    });
    by_fraction.chain(by_index).collect()
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ramp = resolve(cli)?;
    let map =
        GradientMap::new(&ramp.anchors, ramp.resolution).context("Failed to build gradient map")?;
    info!(
        "Built gradient map of {} colors from {} anchors",
        map.len(),
        map.anchors().len()
    );

    let colors = select(&map, &cli.fractions, &cli.indices);
    output::write_colors(io::stdout().lock(), ramp.format, &colors)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    run(&cli)
}
