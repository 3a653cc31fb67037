use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use desagis::config::{FileConfig, load_boundary};
use desagis::domain::{GeoPoint, Ring};
use desagis::facade::{
    DrawingSession, FinishedShape, PointDecision, ShapeKind, land_use_summary, recompute_areas,
    validate_point,
};
use desagis::geometry::{compute_area, compute_path_length, format_area, format_length};
use desagis::storage::{decode_ring, decode_road_geometry, read_records, write_records};

/// Village GIS geometry: parcel area, boundary checks and road length
///
/// Examples:
///   # Area of a stored parcel ring ([[lat, lng], ...])
///   desagis area sawah.json
///
///   # Length of a road stored as GeoJSON LineString or raw points
///   desagis length jalan.json
///
///   # Is a point inside the village boundary?
///   desagis contains --lat -6.6181 --lng 110.6539
///
///   # Recompute every stored area after a bulk coordinate import
///   desagis recompute batas_wilayah.json -o batas_wilayah.json
#[derive(Parser, Debug)]
#[command(name = "desagis")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches desagis.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Area of a stored ring file
    Area { ring: PathBuf },

    /// Length of a stored road geometry file
    Length { road: PathBuf },

    /// Check a point against the reference boundary
    Contains {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Boundary ring file (defaults to config, then the built-in village)
        #[arg(long)]
        boundary: Option<PathBuf>,
    },

    /// Replay map clicks ([[lat, lng], ...]) through a drawing session
    Draw {
        clicks: PathBuf,
        /// polygon or polyline
        #[arg(long, default_value = "polygon")]
        shape: ShapeKind,
        #[arg(long)]
        boundary: Option<PathBuf>,
        /// Accept clicks anywhere
        #[arg(long)]
        no_boundary: bool,
    },

    /// Recompute the stored area of every boundary record
    Recompute {
        records: PathBuf,
        /// Output file (defaults to printing a report only)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Total area per land-use kind
    Summary { records: PathBuf },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::load_from(config_path)?),
        None => FileConfig::load(),
    }
    .unwrap_or_default();

    let verbose = args.verbose || file_config.verbose;
    init_logging(verbose);

    match args.command {
        Command::Area { ref ring } => {
            let ring = read_ring(ring)?;
            let area = compute_area(&ring);
            println!("Vertices: {}", ring.len());
            println!("Area:     {:.2} m²", area);
            println!("Display:  {}", format_area(Some(area)));
        }
        Command::Length { ref road } => {
            let contents = std::fs::read_to_string(road)
                .with_context(|| format!("Failed to read road file: {:?}", road))?;
            let value: serde_json::Value =
                serde_json::from_str(&contents).context("Failed to parse road file")?;
            let path = decode_road_geometry(&value)
                .context("Unrecognised road geometry")?
                .into_path();
            let length = compute_path_length(&path);
            println!("Points:   {}", path.len());
            println!("Length:   {:.2} m", length);
            println!("Display:  {}", format_length(length));
        }
        Command::Contains { lat, lng, ref boundary } => {
            let ring = reference_boundary(boundary.as_deref(), &file_config)?;
            let point = GeoPoint::new(lat, lng);
            let inside = validate_point(point, Some(ring.as_slice()));
            println!(
                "{} is {} {}",
                point,
                if inside { "inside" } else { "outside" },
                file_config.village_name
            );
        }
        Command::Draw {
            ref clicks,
            shape,
            ref boundary,
            no_boundary,
        } => {
            let enforce = !no_boundary && file_config.drawing().enforce_boundary;
            let ring = if enforce {
                Some(reference_boundary(boundary.as_deref(), &file_config)?)
            } else {
                None
            };
            run_drawing(&read_ring(clicks)?, shape, ring.as_deref())?;
        }
        Command::Recompute {
            ref records,
            ref output,
        } => recompute(records, output.as_deref())?,
        Command::Summary { ref records } => {
            let records = read_records(records)
                .with_context(|| format!("Failed to read records: {:?}", records))?;
            let totals = land_use_summary(&records);
            let grand_total: f64 = totals.values().sum();
            println!("Land use ({} parcels)", records.len());
            println!("========");
            for (kind, area) in &totals {
                println!("  {:<16} {}", kind.as_str(), format_area(Some(*area)));
            }
            println!("  {:<16} {}", "Total", format_area(Some(grand_total)));
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn read_ring(path: &Path) -> Result<Ring> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ring file: {:?}", path))?;
    decode_ring(&contents).with_context(|| format!("Failed to parse ring file: {:?}", path))
}

fn reference_boundary(flag: Option<&Path>, config: &FileConfig) -> Result<Ring> {
    load_boundary(flag.or(config.boundary.as_deref()))
}

fn run_drawing(clicks: &[GeoPoint], shape: ShapeKind, boundary: Option<&[GeoPoint]>) -> Result<()> {
    let mut session = DrawingSession::new(shape, boundary);
    let mut rejected = 0;

    for (i, &click) in clicks.iter().enumerate() {
        match session.add_point(click) {
            PointDecision::Accepted { count } => {
                println!("  #{:<3} {} accepted ({} points)", i + 1, click, count)
            }
            PointDecision::Rejected => {
                rejected += 1;
                println!("  #{:<3} {} rejected: outside boundary", i + 1, click)
            }
        }
    }

    println!();
    println!("Preview: {:?}, {} rejected", session.preview(), rejected);

    match session.finish().context("Drawing could not be completed")? {
        shape @ FinishedShape::Ring(_) => {
            println!(
                "Polygon with {} vertices, area {}",
                shape.points().len(),
                format_area(Some(shape.area()))
            );
        }
        shape @ FinishedShape::Path(_) => {
            println!(
                "Polyline with {} points, length {}",
                shape.points().len(),
                format_length(shape.length())
            );
        }
    }
    Ok(())
}

fn recompute(input: &Path, output: Option<&Path>) -> Result<()> {
    let mut records =
        read_records(input).with_context(|| format!("Failed to read records: {:?}", input))?;

    let pb = create_progress(records.len() as u64);
    let mut changed = 0;
    for record in records.iter_mut() {
        changed += recompute_areas(std::slice::from_mut(record));
        pb.inc(1);
    }
    pb.finish_with_message(format!("{} of {} areas changed", changed, records.len()));

    for record in &records {
        println!("  {:<32} {}", record.name, format_area(record.area_m2));
    }

    if let Some(out) = output {
        write_records(out, &records)
            .with_context(|| format!("Failed to write records: {:?}", out))?;
        println!();
        println!("Output: {}", out.display());
    }
    Ok(())
}

fn create_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template("{bar:30.green} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}
