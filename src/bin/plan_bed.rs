//! Plan garden beds from the command line
//!
//! Reads a plant catalog and a JSON array of bed requests, then prints the
//! plan for every bed:
//!
//! ```text
//! plan_bed demos/plants.json demos/beds.json --today 2025-04-10
//! plan_bed demos/plants.json demos/beds.json --config demos/planner.json --json
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use garden_planner::{logging, BedPlan, BedPlanner, BedRequest, PlantCatalog, PlannerConfig};

#[derive(Parser)]
#[command(name = "plan_bed")]
#[command(version, about = "Planting recommendations for garden beds", long_about = None)]
struct Cli {
    /// Plant catalog (JSON array of plant records)
    catalog: PathBuf,

    /// Bed requests (JSON array)
    beds: PathBuf,

    /// Reference table overrides
    #[arg(short, long, env = "GARDEN_PLANNER_CONFIG")]
    config: Option<PathBuf>,

    /// Planning date (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print plans as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    let planner = BedPlanner::new(&config).context("Invalid planner configuration")?;
    let catalog = PlantCatalog::load(&cli.catalog)?;

    let contents = fs::read_to_string(&cli.beds)
        .with_context(|| format!("Failed to read bed requests: {:?}", cli.beds))?;
    let requests: Vec<BedRequest> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse bed requests: {:?}", cli.beds))?;

    let today = cli.today.unwrap_or_else(|| chrono::Local::now().date_naive());

    let start = Instant::now();
    let plans = planner.plan_beds(&requests, &catalog, today);
    tracing::info!("Planning took {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);

    if cli.json {
        let output: Vec<serde_json::Value> = plans
            .iter()
            .zip(&requests)
            .map(|(plan, request)| match plan {
                Ok(plan) => serde_json::to_value(plan),
                Err(e) => Ok(serde_json::json!({ "bedName": request.name, "error": format!("{:#}", e) })),
            })
            .collect::<Result<_, _>>()?;
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (plan, request) in plans.iter().zip(&requests) {
        match plan {
            Ok(plan) => print_plan(plan),
            Err(e) => println!("\n{}: {:#}", request.name, e),
        }
    }

    Ok(())
}

fn print_plan(plan: &BedPlan) {
    println!("\n{}", "=".repeat(60));
    println!("{} (zone {}, {})", plan.bed_name, plan.zone, plan.current_season.display_name());
    println!("{}", "=".repeat(60));
    println!("Next rotation family: {}", plan.recommended_families.join(", "));

    for (a, b) in &plan.incompatible_pairs {
        println!("  ! {} and {} should be kept apart", a, b);
    }

    println!("\nReady to plant:");
    let mut any_ready = false;
    for candidate in plan.ready_candidates() {
        any_ready = true;
        let window = candidate
            .planting_window
            .map(|w| format!("{} to {}", w.start, w.end))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<24} {:<14} {:<12} {:>4} plants ({}) sow {}",
            candidate.plant_name,
            candidate.family,
            candidate.compatibility.display_text(),
            candidate.optimal_quantity,
            candidate.method.display_name(),
            window
        );
    }
    if !any_ready {
        println!("  (nothing)");
    }

    let waiting: Vec<&str> = plan
        .candidates
        .iter()
        .filter(|c| !c.is_ready())
        .map(|c| c.plant_name.as_str())
        .collect();
    if !waiting.is_empty() {
        println!("\nNot now (rotation or season): {}", waiting.join(", "));
    }
}
