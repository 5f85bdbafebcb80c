use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use linkedgeo::config::FileConfig;
use linkedgeo::geometry::Bounds;
use linkedgeo::input::{CoordinateOrder, parse_rings};
use linkedgeo::report::Summary;

/// Build a linked multipolygon from ring data and report its structure
///
/// The input is a JSON array of polygons, each an array of loops, each an
/// array of coordinate pairs.
///
/// Examples:
///   # Summarize a ring file with [lat, lng] pairs
///   linkedgeo -i rings.json
///
///   # GeoJSON-style [lng, lat] pairs, with bounding box
///   linkedgeo -i rings.json --order lng-lat --bounds
///
///   # Use a config file
///   linkedgeo --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "linkedgeo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches linkedgeo.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ring file to load
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Coordinate pair order: lat-lng (default) or lng-lat
    #[arg(long)]
    order: Option<CoordinateOrder>,

    /// Print the bounding box of all vertices
    #[arg(long)]
    bounds: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let input = args
        .input
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.input.clone()));
    let order = args
        .order
        .or_else(|| file_config.as_ref().map(|c| c.order))
        .unwrap_or_default();
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let show_bounds = args.bounds || file_config.as_ref().map(|c| c.bounds).unwrap_or(false);

    let Some(input) = input else {
        bail!("Must provide a ring file with --input/-i or `input` in the config file");
    };

    println!("linkedgeo - Linked Multipolygon Builder");
    println!("=======================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", input.display());
        println!("  Coordinate order: {:?}", order);
        println!(
            "  Bounds: {}",
            if show_bounds { "enabled" } else { "disabled" }
        );
        println!();
    }

    let spinner = create_spinner("Reading ring file...");
    let start = Instant::now();
    let contents = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read ring file: {}", input.display()))?;
    spinner.finish_with_message(format!(
        "Read {:.1} KB [{:.1}s]",
        contents.len() as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Building linked polygons...");
    let start = Instant::now();
    let mut head = parse_rings(&contents, order).context("Failed to build polygons from input")?;
    let summary = Summary::from_polygon(&head);
    spinner.finish_with_message(format!(
        "Built {} polygons, {} loops, {} vertices [{:.1}s]",
        summary.polygons,
        summary.loops,
        summary.vertices,
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        for (i, polygon) in head.iter().enumerate() {
            let vertices: Vec<usize> = polygon.loops().map(|l| l.count_vertices()).collect();
            println!(
                "  Polygon {}: {} loops, vertices per loop {:?}",
                i,
                polygon.count_loops(),
                vertices
            );
        }
        println!(
            "  Coordinate payload: {:.1} KB",
            summary.estimated_coordinate_bytes() as f64 / 1024.0
        );
    }

    if show_bounds {
        match Bounds::from_polygon(&head) {
            Some(b) => println!(
                "Bounds: lat [{:.6}, {:.6}], lng [{:.6}, {:.6}] ({:.6} x {:.6} deg)",
                b.min_lat,
                b.max_lat,
                b.min_lng,
                b.max_lng,
                b.width(),
                b.height()
            ),
            None => println!("Bounds: none (no vertices)"),
        }
    }

    let spinner = create_spinner("Releasing structure...");
    let start = Instant::now();
    head.destroy();
    spinner.finish_with_message(format!(
        "Released {} polygons after the head [{:.1}s]",
        summary.polygons - 1,
        start.elapsed().as_secs_f32()
    ));
    if verbose {
        println!(
            "  Head after teardown: {} polygon(s), {} loop(s)",
            head.count_polygons(),
            head.count_loops()
        );
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
