//! cutplan - CLI tool to plan profile cutting-stock consumption.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cutplan_core::{plan_consumption, render_plan};

mod job;

/// Plan stock-pipe consumption for an aluminium profile cutting job.
#[derive(Parser, Debug)]
#[command(name = "cutplan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input job file (JSON: companyId, material, requiredCutLengthsFt)
    #[arg(short, long)]
    input: PathBuf,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Check feasibility only, don't print a plan
    #[arg(long)]
    validate: bool,

    /// Output the full plan as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    let job = job::load_job(&args.input)?;

    info!(
        "Planning {} cut(s) of material {}",
        job.required_cut_lengths_ft.len(),
        job.material.display_name()
    );

    let plan = plan_consumption(&job.material, &job.company_id, &job.required_cut_lengths_ft)
        .with_context(|| format!("Planning failed for {}", args.input.display()))?;

    // Validate-only mode
    if args.validate {
        info!(
            "Plan is feasible: {} pipe(s), {:.3}ft scrap",
            plan.total_pipes_from_stock, plan.total_scrap_ft
        );
        return Ok(());
    }

    let report = if args.json {
        serde_json::to_string_pretty(&plan)?
    } else {
        render_plan(&plan, &job.material)
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{report}"),
    }

    Ok(())
}
