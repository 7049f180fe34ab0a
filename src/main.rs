//! slit-plan - CLI for planning and applying reel slitting.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use slit_plan::config::DEFAULT_STORE_PATH;
use slit_plan::{
    apply_cached_row, clear_plan, plan_slits, validate_inventory, Arrangement, CutMode,
    InventoryStore, JsonStore, PlanRequest, PlanSummary, PlannerConfig, UpsTier,
};

/// Plan how to slit paper reels into side and bottom strips.
#[derive(Parser, Debug)]
#[command(name = "slit-plan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Inventory JSON document
    #[arg(short, long, env = "SLIT_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate and rank arrangements for a parent reel
    Plan {
        /// Parent reel id
        #[arg(short, long)]
        reel: String,

        /// Fan size id
        #[arg(short, long)]
        fan: String,

        /// UPS tier (1-4)
        #[arg(short, long)]
        ups: UpsTier,

        /// Cut mode: side, bottom or both
        #[arg(short, long)]
        mode: CutMode,

        /// Print arrangements as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a reel with the child reels of a cached plan row
    Apply {
        /// Parent reel id
        #[arg(short, long)]
        reel: String,

        /// Row number as shown by `plan` or `show` (1-based)
        #[arg(long)]
        row: usize,

        /// Date stamped on child reels (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the cached plan
    Show,

    /// Clear the cached plan
    Clear,

    /// List active reels
    Reels,
}

fn print_plan(arrangements: &[Arrangement]) {
    if arrangements.is_empty() {
        println!("No slit plans. Run `slit-plan plan` to generate one.");
        return;
    }

    println!(
        "{:>3}  {:<48} {:>10} {:>10} {:>8}",
        "#", "Combination", "Used (cm)", "Waste (cm)", "Eff (%)"
    );
    for (i, a) in arrangements.iter().enumerate() {
        println!(
            "{:>3}  {:<48} {:>10} {:>10} {:>8}{}",
            i + 1,
            a.combination_label,
            a.used_width,
            a.waste,
            a.efficiency_pct,
            if a.best { "  Best" } else { "" }
        );
    }

    let summary = PlanSummary::of(arrangements);
    println!(
        "{} plan(s), best efficiency {:.1}%",
        summary.total, summary.best_efficiency
    );
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

    let mut store = JsonStore::new(&args.store);

    match args.command {
        Command::Plan {
            reel,
            fan,
            ups,
            mode,
            json,
        } => {
            let request = PlanRequest::new(reel, fan, ups, mode);
            let plan = plan_slits(&mut store, &request, &PlannerConfig::default())
                .with_context(|| format!("Failed to plan reel {}", request.reel_id))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan.arrangements)?);
            } else {
                info!(
                    "Reel {}: {}cm, {}GSM, {}",
                    plan.reel.id, plan.reel.width, plan.reel.gsm, plan.reel.paper_type
                );
                print_plan(&plan.arrangements);
            }
        }
        Command::Apply { reel, row, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let out = apply_cached_row(&mut store, &reel, row, date)
                .with_context(|| format!("Failed to slit reel {}", reel))?;

            for child in &out.children {
                info!(
                    "{}: {}cm, {}kg ({})",
                    child.id, child.width, child.weight, child.notes
                );
            }
        }
        Command::Show => {
            let plan = store
                .load_plan()
                .with_context(|| format!("Failed to read {}", args.store.display()))?;
            if let Some(reel) = &plan.reel_id {
                info!("Cached plan for reel {}", reel);
            }
            print_plan(&plan.rows);
        }
        Command::Clear => {
            clear_plan(&mut store)?;
            info!("Slit plan results cleared");
        }
        Command::Reels => {
            let reels = store
                .list_reels()
                .with_context(|| format!("Failed to read {}", args.store.display()))?;
            let bottoms = store.list_bottom_sizes()?;

            for warning in validate_inventory(&reels, &bottoms).warnings {
                warn!("{}", warning);
            }

            for reel in &reels {
                println!(
                    "{}  {:>7}cm  {:>5}GSM  {:>9}kg  {:<12} {}  {}",
                    reel.id,
                    reel.width,
                    reel.gsm,
                    reel.weight,
                    reel.paper_type,
                    reel.date,
                    reel.notes
                );
            }
            println!("{} reel(s)", reels.len());
        }
    }

    Ok(())
}
