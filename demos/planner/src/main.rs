//! wayfare: plan a trip over a CSV city dataset.
//!
//! ```text
//! wayfare --from "New Delhi" --to Chennai --metric cost
//! wayfare --from Mumbai --to Kolkata --both --json
//! wayfare --from Pune --reachable
//! ```
//!
//! Set `RUST_LOG=debug` to see individual searches.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use wf_core::Metric;
use wf_data::load_graph;
use wf_trip::{TripPlanner, TripReport, shared};

/// Bundled dataset, located relative to this crate so the binary works from
/// any directory.
const DEFAULT_CITIES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/cities.csv");
const DEFAULT_ROUTES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/routes.csv");

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "wayfare", version, about = "Shortest trips by distance or cost", long_about = None)]
struct Cli {
    /// Locations CSV (id,name,latitude,longitude)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CITIES)]
    cities: PathBuf,

    /// Routes CSV (origin,destination,distance,cost)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_ROUTES)]
    routes: PathBuf,

    /// Origin location id
    #[arg(long)]
    from: String,

    /// Destination location id
    #[arg(long)]
    to: Option<String>,

    /// Weight to minimise: "distance" or "cost"
    #[arg(long, default_value_t = Metric::Distance)]
    metric: Metric,

    /// Plan under both metrics and compare them
    #[arg(long)]
    both: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// List every location reachable from --from
    #[arg(long)]
    reachable: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let graph = load_graph(&cli.cities, &cli.routes).with_context(|| {
        format!("loading {} and {}", cli.cities.display(), cli.routes.display())
    })?;
    let planner = shared::install(TripPlanner::new(graph))?;

    if cli.reachable {
        let ids = planner.reachable(&cli.from)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&ids)?);
        } else {
            println!("Reachable from {}:", cli.from);
            for id in &ids {
                println!("  {id}");
            }
        }
        return Ok(());
    }

    let Some(to) = cli.to.as_deref() else {
        bail!("--to is required unless --reachable is given");
    };

    if cli.both {
        let pair = planner.plan_both(&cli.from, to)?;
        let diff = pair.by_distance.compare_with(&pair.by_cost);
        if cli.json {
            let out = serde_json::json!({
                "distance": pair.by_distance,
                "cost": pair.by_cost,
                "comparison": diff,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            print_report(&pair.by_distance);
            println!();
            print_report(&pair.by_cost);
            println!();
            println!(
                "Shortest route saves {:.2} km, cheapest route saves {:.2}",
                -diff.distance_difference, diff.cost_difference
            );
        }
        return Ok(());
    }

    let report = planner.plan(&cli.from, to, cli.metric)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &TripReport) {
    println!("{report}");
    if !report.valid {
        return;
    }
    for seg in &report.segments {
        println!(
            "  {:>2}. {} -> {}: {:.2} km, {:.2} ({:.2}/km)",
            seg.step,
            seg.from,
            seg.to,
            seg.distance,
            seg.cost,
            seg.cost_per_km()
        );
    }
}
