use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use outreach::core::db::{
    AreaRepository, DEFAULT_GROUP_ID, HouseNumberRepository, HouseNumberUpdate,
    InteractionOutcome, Marathon, MarathonDb, MarathonRepository, SeedSource,
};
use outreach::core::{session::Session, stats};

#[derive(Parser)]
#[command(name = "outreach")]
#[command(about = "Track door-to-door outreach marathons")]
struct Cli {
    /// JSON marathon catalog to load instead of the built-in one
    #[arg(long, value_name = "FILE", global = true)]
    seed: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dashboard of the current marathon
    Current {
        /// Show this marathon instead of the default one
        #[arg(long)]
        marathon: Option<String>,
    },
    /// Upcoming marathons prepared by an admin
    Upcoming,
    /// Outcome statistics over all marathons
    Stats,
    /// Log an interaction at a house
    Log {
        marathon: String,
        area: String,
        house: String,
        /// Outcome, e.g. SAVED, NO_INTEREST, "follow up"
        #[arg(long)]
        status: String,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Start working an area with a group, then end the engagement
    Engage {
        marathon: String,
        area: String,
        #[arg(long, default_value = DEFAULT_GROUP_ID)]
        group: String,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "outreach=debug" } else { "outreach=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_marathon_line(marathon: &Marathon) {
    println!(
        "  {} [{}] {} - {}",
        marathon.id, marathon.status, marathon.name, marathon.date
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let source = match args.seed {
        Some(path) => SeedSource::File(path),
        None => SeedSource::Builtin,
    };
    let db = MarathonDb::open(source).await?;
    let mut session = Session::start(&db).await?;

    match args.command {
        Command::Current { marathon } => {
            if let Some(id) = marathon.as_deref() {
                session.select_marathon(&db, Some(id)).await?;
            }
            let Some(marathon) = session.current_marathon(&db).await? else {
                println!("No current or upcoming marathon available.");
                return Ok(());
            };
            if args.json {
                return print_json(&marathon);
            }

            println!("=== {} ===", marathon.name);
            println!("{} - Status: {}", marathon.date, marathon.status);
            if let Some(point) = &marathon.meeting_point {
                println!("Meeting point: {}", point.describe());
            }
            println!("\nAreas:");
            for area in &marathon.areas {
                println!(
                    "  {} {} ({}/{} visited)",
                    area.id,
                    area.name,
                    area.visited_count(),
                    area.house_numbers.len()
                );
                if args.verbose {
                    for house in &area.house_numbers {
                        println!("    {} {} - {}", house.id, house.address, house.status);
                    }
                }
            }
            if let Some(group) = session.active_group() {
                match session.engaged_area(&db).await? {
                    Some(area) => println!("\n{} is working {}", group.name, area.name),
                    None => println!("\n{} is not working an area", group.name),
                }
            }
        }
        Command::Upcoming => {
            let upcoming = db.get_upcoming_marathons().await?;
            if args.json {
                return print_json(&upcoming);
            }
            println!("=== Upcoming Marathons (Admin Prepared) ===");
            if upcoming.is_empty() {
                println!("No upcoming marathons.");
            }
            for marathon in &upcoming {
                print_marathon_line(marathon);
            }
        }
        Command::Stats => {
            let marathons = db.get_marathons().await?;
            let snapshot = stats::compute(&marathons);
            if args.json {
                return print_json(&snapshot);
            }
            println!("=== Statistics ===");
            println!("Total marathons: {}", snapshot.total_marathons);
            println!("Completed marathons: {}", snapshot.total_completed_marathons);
            println!("Participating groups (est.): {}", snapshot.participants_count);
            println!("Souls saved: {}", snapshot.saved_count());
            println!("\nOverall outcomes:");
            for (outcome, count) in &snapshot.overall_outcomes {
                println!("  {}: {}", outcome, count);
            }
            for stat in &snapshot.marathon_stats {
                println!("\n{} ({} houses visited)", stat.marathon_name, stat.houses_visited);
                for (outcome, count) in &stat.outcomes {
                    println!("  {}: {}", outcome, count);
                }
            }
        }
        Command::Log {
            marathon,
            area,
            house,
            status,
            notes,
            name,
            phone,
            email,
        } => {
            let outcome = InteractionOutcome::try_from(status.as_str())?;
            let update = HouseNumberUpdate::interaction(outcome, notes, name, phone, email);
            let updated = db
                .update_house_number(&marathon, &area, &house, &update)
                .await?;
            if args.json {
                return print_json(&updated);
            }
            println!("{} {} - {}", updated.id, updated.address, updated.status);
            if let Some(notes) = &updated.notes {
                println!("  Notes: {}", notes);
            }
            if let Some(contact) = &updated.contact_name {
                println!("  Contact: {}", contact);
            }
        }
        Command::Engage {
            marathon,
            area,
            group,
        } => {
            session.select_marathon(&db, Some(marathon.as_str())).await?;
            let started = session
                .start_engagement(&db, &marathon, &area, &group)
                .await?;
            let start = started
                .start_point
                .as_ref()
                .map(|p| p.describe())
                .unwrap_or_else(|| "start point not set".to_string());
            println!("Started in {}. Navigate to: {}", started.name, start);

            let current = db.get_area(&marathon, &area).await?;
            let last = current.as_ref().and_then(|a| a.last_interaction());
            match last {
                Some(house) => println!(
                    "Last house interacted with: {} (Status: {})",
                    house.address, house.status
                ),
                None => println!("No interactions logged in {} yet.", started.name),
            }
            session.end_engagement(last.map(|h| h.id.as_str()));

            let meeting = session
                .current_marathon(&db)
                .await?
                .and_then(|m| m.meeting_point)
                .map(|p| p.describe())
                .unwrap_or_else(|| "meeting point not set".to_string());
            println!("Ended in {}. Navigate to meeting point: {}", started.name, meeting);
        }
    }

    Ok(())
}
