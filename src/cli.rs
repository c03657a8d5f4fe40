use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use nearspot_application::prelude::*;
use nearspot_core::{
    entities::{Id, MapPoint, ReportReason},
    gateways::GeolocationGateway as _,
    usecases,
};

use crate::{config::Config, gateways, snapshot, task};

#[derive(Debug, Parser)]
#[command(name = "nearspot", version, about)]
struct Cli {
    /// Configuration file (default: nearspot.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List stored locations ordered by distance
    Nearby {
        /// Reference position as "lat,lng"; falls back to the
        /// configured default position
        #[arg(long)]
        at: Option<String>,
    },
    /// Add a new location
    AddLocation {
        name: String,
        lat: f64,
        lng: f64,
    },
    /// Add a review for a location
    AddReview {
        location_id: String,
        /// Rating in whole stars (1-5)
        rating: i8,
        comment: String,
    },
    /// Report a review for abuse
    Report {
        location_id: String,
        review_id: String,
        /// One of: spam, abusive, inappropriate, other
        reason: String,
    },
    /// Delete inactive locations (one-shot, for external schedulers)
    Sweep,
    /// Run the inactivity sweep on a fixed cadence
    Task,
}

pub fn run() -> Result<()> {
    let Cli { config, command } = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(config.as_deref())?;
    let store = snapshot::load(&cfg.store.snapshot)?;

    match command {
        Command::Nearby { at } => {
            let reference = match at {
                Some(at) => at.parse::<MapPoint>()?,
                None => match gateways::geolocation_gateway(&cfg.geolocation).current_position() {
                    Some(pos) => pos,
                    None => bail!("No reference position: pass --at or configure a default"),
                },
            };
            let ranked = find_nearby_locations(&store, reference)?;
            if ranked.is_empty() {
                println!("No locations stored");
            }
            for entry in ranked {
                println!(
                    "{:9.2} mi  {} ({}, {} reviews, rated {:.1})",
                    entry.distance.to_miles(),
                    entry.location.name,
                    entry.location.id,
                    entry.location.reviews.len(),
                    f64::from(entry.location.rating),
                );
            }
        }
        Command::AddLocation { name, lat, lng } => {
            let location =
                usecases::create_new_location(&store, usecases::NewLocation { name, lat, lng })?;
            snapshot::save(&store, &cfg.store.snapshot)?;
            println!("Added location {}", location.id);
        }
        Command::AddReview {
            location_id,
            rating,
            comment,
        } => {
            let review = usecases::add_review(
                &store,
                &Id::from(location_id),
                usecases::NewReview { rating, comment },
            )?;
            snapshot::save(&store, &cfg.store.snapshot)?;
            println!("Added review {}", review.id);
        }
        Command::Report {
            location_id,
            review_id,
            reason,
        } => {
            let Ok(reason) = reason.parse::<ReportReason>() else {
                bail!("Invalid report reason: {reason}");
            };
            let new = usecases::NewReport {
                location_id: location_id.into(),
                review_id: review_id.into(),
                reason,
            };
            let outcome = report_review(&store, new, cfg.moderation)?;
            snapshot::save(&store, &cfg.store.snapshot)?;
            match outcome {
                ModerationOutcome::Kept { report_count } => {
                    println!("Report filed ({report_count} within the window)");
                }
                ModerationOutcome::Purged { deleted_reports } => {
                    println!("Review removed, {deleted_reports} reports cleaned up");
                }
            }
        }
        Command::Sweep => {
            let deleted = sweep_inactive_locations(&store, cfg.sweep.retention_period)?;
            snapshot::save(&store, &cfg.store.snapshot)?;
            println!("Deleted {deleted} inactive locations");
        }
        Command::Task => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(task::run(&store, &cfg.store.snapshot, &cfg.sweep));
        }
    }
    Ok(())
}
