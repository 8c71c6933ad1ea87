//! `booking` CLI — query bookable slots and open dates from a catalog file.
//!
//! ## Usage
//!
//! ```sh
//! # Start times for service s1 at location 1 on a date, any professional
//! booking slots -c catalog.json -l 1 -s s1 -d 2026-03-16
//!
//! # Same, for one professional, as a JSON array
//! booking slots -c catalog.json -l 1 -s s1 -d 2026-03-16 -p p2 --json
//!
//! # Catalog from stdin
//! cat catalog.json | booking slots -l 1 -s s1 -d 2026-03-16
//!
//! # Open/closed strip for the next two weeks
//! booking days -c catalog.json -l 1 --from 2026-03-15
//!
//! # First open date for a professional
//! booking next-open -c catalog.json -l 1 -p p2 --from 2026-03-15
//! ```

use anyhow::{Context, Result};
use booking_engine::calendar::{next_available_date, open_dates};
use booking_engine::slots::{
    compute_available_slots_with, SlotOptions, DEFAULT_HORIZON_DAYS, SLOT_INTERVAL_MINUTES,
};
use booking_engine::{Catalog, ProfessionalSelection};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "booking",
    version,
    about = "Barbershop booking availability CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine decisions (skipped schedule entries, date scans)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Where to look: catalog source, location, professional selection.
#[derive(Args)]
struct Target {
    /// Catalog JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    catalog: Option<String>,
    /// Location id
    #[arg(short, long)]
    location: String,
    /// Professional id, or "any" for no preference
    #[arg(short, long, default_value = "any")]
    professional: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable start times for a service on a date
    Slots {
        #[command(flatten)]
        target: Target,
        /// Service id
        #[arg(short, long)]
        service: String,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// Minutes between candidate start times
        #[arg(long, default_value_t = SLOT_INTERVAL_MINUTES)]
        interval: u32,
        /// Print a JSON array instead of one time per line
        #[arg(long)]
        json: bool,
    },
    /// Show which dates are open over the horizon
    Days {
        #[command(flatten)]
        target: Target,
        /// First date of the horizon (defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Number of days to show
        #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
        horizon: u32,
    },
    /// Print the first open date within the horizon
    NextOpen {
        #[command(flatten)]
        target: Target,
        /// First date of the horizon (defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Number of days to scan
        #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
        horizon: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Slots {
            target,
            service,
            date,
            interval,
            json,
        } => {
            let catalog = load_catalog(target.catalog.as_deref())?;
            let location = catalog.location(&target.location)?;
            let service = location.service(&service)?;
            let selection = parse_selection(&target.professional)?;
            let options = SlotOptions::new(interval, DEFAULT_HORIZON_DAYS)?;

            let slots = compute_available_slots_with(
                date,
                service.duration_min,
                &location.professionals,
                &selection,
                &options,
            );
            debug!(count = slots.len(), %date, service = %service.id, "computed slots");

            if json {
                println!("{}", serde_json::to_string(&slots)?);
            } else {
                for slot in &slots {
                    println!("{}", slot);
                }
            }
        }
        Commands::Days {
            target,
            from,
            horizon,
        } => {
            let catalog = load_catalog(target.catalog.as_deref())?;
            let location = catalog.location(&target.location)?;
            let selection = parse_selection(&target.professional)?;
            let from = from.unwrap_or_else(today);

            for (date, open) in open_dates(from, horizon, &location.professionals, &selection) {
                println!("{} {}", date, if open { "open" } else { "closed" });
            }
        }
        Commands::NextOpen {
            target,
            from,
            horizon,
        } => {
            let catalog = load_catalog(target.catalog.as_deref())?;
            let location = catalog.location(&target.location)?;
            let selection = parse_selection(&target.professional)?;
            let from = from.unwrap_or_else(today);

            match next_available_date(from, horizon, &location.professionals, &selection) {
                Some(date) => println!("{}", date),
                None => anyhow::bail!(
                    "No open date within {} days from {} for '{}'",
                    horizon,
                    from,
                    selection
                ),
            }
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "booking_engine=debug,booking=debug"
    } else {
        "booking_engine=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_selection(raw: &str) -> Result<ProfessionalSelection> {
    raw.parse()
        .with_context(|| format!("Invalid professional: '{}'", raw))
}

fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    let json = read_input(path)?;
    Catalog::from_json(&json).context("Failed to parse catalog")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
