use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use front_of_house::insights::InsightCard;
use front_of_house::kitchen::{KitchenBoard, PartyFilter};
use front_of_house::reservations::{
    MonthCursor, available_dates, calendar_months, default_date, reservations_on, summarize_day,
};
use front_of_house::{Dataset, build_manifest, rank_reservations, rank_reservations_on};

/// French Laudure front-of-house dashboard
#[derive(Debug, Parser)]
#[command(name = "front-of-house", version, about)]
struct Cli {
    /// Diner dataset (detailed_info.json)
    #[arg(long, env = "DINERS_PATH", global = true)]
    diners: Option<String>,

    /// Kitchen manifest (dishes.json)
    #[arg(long, env = "DISHES_PATH", global = true)]
    dishes: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dates that have reservations
    Dates,
    /// Reservations for one date (earliest by default)
    Day {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Reservations ranked by priority, optionally for one date
    Priority {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Calendar month pages around the selected date
    Calendar {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Chef view grouped by table
    Tables {
        /// Party id, customer name or dish name
        #[arg(long, default_value = "")]
        filter: String,
        /// Party ids to remove from the board
        #[arg(long = "delete")]
        delete: Vec<i64>,
    },
    /// Chef view grouped by dish
    Dishes {
        /// Party ids to remove from the board
        #[arg(long = "delete")]
        delete: Vec<i64>,
    },
    /// Derive the kitchen manifest from the diner dataset
    Manifest {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// A reservation entry with its insight card alongside
#[derive(Serialize)]
struct WithInsights<T: Serialize> {
    #[serde(flatten)]
    entry: T,
    insights: InsightCard,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn board_with_deletes(dataset: &Dataset, delete: &[i64]) -> anyhow::Result<KitchenBoard> {
    let mut board = KitchenBoard::new(dataset.parties.clone());
    for id in delete {
        board.delete_party(*id)?;
    }
    Ok(board)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = front_of_house::setup_environment().with_paths(cli.diners, cli.dishes);
    tracing::info!(environment = %config.environment, "Front-of-house dashboard starting");

    let dataset = Dataset::load(&config)?;

    match cli.command {
        Command::Dates => print_json(&available_dates(&dataset.diners)),
        Command::Day { date } => {
            let Some(date) = date.or_else(|| default_date(&dataset.diners)) else {
                return print_json(&json!({ "reservations": [] }));
            };
            let list = reservations_on(&dataset.diners, date);
            let summary = summarize_day(date, &list);
            let cards: Vec<_> = list
                .into_iter()
                .map(|entry| WithInsights {
                    insights: InsightCard::for_reservation(entry.reservation),
                    entry,
                })
                .collect();
            print_json(&json!({ "summary": summary, "reservations": cards }))
        }
        Command::Priority { date } => {
            let ranked = match date {
                Some(date) => rank_reservations_on(&dataset.diners, date),
                None => rank_reservations(&dataset.diners),
            };
            let cards: Vec<_> = ranked
                .into_iter()
                .map(|entry| WithInsights {
                    insights: InsightCard::for_reservation(entry.reservation),
                    entry,
                })
                .collect();
            print_json(&cards)
        }
        Command::Calendar { date } => {
            let dates = available_dates(&dataset.diners);
            let selected = date.or_else(|| dates.first().copied());
            let pages = calendar_months(&dates, selected);
            let cursor = MonthCursor::new(&pages, selected);
            print_json(&json!({ "current": cursor.index(), "months": pages }))
        }
        Command::Tables { filter, delete } => {
            let board = board_with_deletes(&dataset, &delete)?;
            print_json(&board.tables(&PartyFilter::new(filter)))
        }
        Command::Dishes { delete } => {
            let board = board_with_deletes(&dataset, &delete)?;
            print_json(&board.dishes())
        }
        Command::Manifest { out } => {
            let manifest = build_manifest(&dataset.diners, Utc::now(), &config.diners_path);
            match out {
                Some(path) => {
                    let json = serde_json::to_string_pretty(&manifest)?;
                    std::fs::write(&path, json)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!(path = %path.display(), "Manifest written");
                    Ok(())
                }
                None => print_json(&manifest),
            }
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<front_of_house::AppError>() {
                Some(app) => {
                    tracing::error!(code = %app.code, "{}", app.message);
                    eprintln!("error [{}]: {}", app.code, app.message);
                }
                None => {
                    tracing::error!("{:#}", e);
                    eprintln!("error: {:#}", e);
                }
            }
            std::process::ExitCode::FAILURE
        }
    }
}
