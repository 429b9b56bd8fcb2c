use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use geoshm::export::write_csv;
use geoshm::{compute_boundary, compute_centroid, validate, LocationSet};
use tracing_subscriber::EnvFilter;

/// Validate a turbine location file and print its boundary and centroid
#[derive(Debug, Parser)]
#[command(name = "geoshm", version)]
struct Args {
    /// GeoJSON FeatureCollection of Point features
    path: PathBuf,

    /// Print the locations as CSV instead of the summary
    #[arg(long)]
    csv: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let raw = std::fs::read(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let set = validate(&raw).with_context(|| format!("Rejected {}", args.path.display()))?;

    if args.csv {
        write_csv(&set, std::io::stdout().lock())?;
    } else {
        print_summary(&set);
    }

    Ok(())
}

fn print_summary(set: &LocationSet) {
    println!("geoshm - Turbine Location Info\n");
    println!("Turbines: {}", set.len());

    for (i, record) in set.iter().enumerate() {
        let p = &record.properties;
        println!(
            "  {:>3}. {} ({}) lat={:.5} lon={:.5} capacity={} installed={} status={}",
            i + 1,
            p.id,
            p.name,
            record.position.lat,
            record.position.lon,
            p.capacity,
            p.install_year,
            p.status
        );
    }

    let points = set.positions();

    println!("\nBoundary:");
    match compute_boundary(&points) {
        Some(hull) => {
            for v in hull.vertices() {
                println!("  ({:.5}, {:.5})", v.lat, v.lon);
            }
            if hull.is_degenerate() {
                println!("  (all turbines are collinear)");
            }
        }
        None => println!("  undefined (fewer than 3 turbines)"),
    }

    let centroid = compute_centroid(&points);
    println!("\nCentroid: ({:.5}, {:.5})", centroid.lat, centroid.lon);
}
