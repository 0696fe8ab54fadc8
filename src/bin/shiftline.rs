use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use jiff::civil::Date;
use jiff::Zoned;
use shiftline::dates::week_dates;
use shiftline::{open_hours, Plan};

#[derive(Parser)]
#[command(name = "shiftline", about = "Shift-rotation day planner", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a plan file
    Check {
        /// Path to the plan JSON
        #[arg(long)]
        plan: PathBuf,
    },
    /// Resolve the shift description for a date
    Resolve {
        #[arg(long)]
        plan: PathBuf,
        /// Date to resolve (YYYY-MM-DD)
        date: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a date's timeline with open blocks interleaved
    Day {
        #[arg(long)]
        plan: PathBuf,
        /// Date to lay out (YYYY-MM-DD)
        date: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Suggest the lightest upcoming off day
    Suggest {
        #[arg(long)]
        plan: PathBuf,
        /// Earliest acceptable date (YYYY-MM-DD)
        #[arg(long)]
        not_before: Option<String>,
        /// Scan anchor, defaults to the current date
        #[arg(long)]
        today: Option<String>,
    },
    /// Show a week of resolved shifts and open hours
    Week {
        #[arg(long)]
        plan: PathBuf,
        /// Any date in the week to show, defaults to the current date
        date: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { plan } => {
            let plan = load_plan(&plan);
            if let Err(e) = plan.validate() {
                eprintln!("{e}");
                process::exit(1);
            }
            println!("\u{2713} valid");
        }
        Command::Resolve { plan, date, json } => {
            let plan = load_plan(&plan);
            let date = parse_date(&date);
            let block = plan.resolved_block(date);
            if json {
                print_json(&block);
            } else {
                println!("{date}  {block}");
            }
        }
        Command::Day { plan, date, json } => {
            let plan = load_plan(&plan);
            let date = parse_date(&date);
            let blocks = plan.day_with_gaps(date);
            if json {
                print_json(&blocks);
            } else {
                for block in &blocks {
                    println!("{block}");
                }
            }
        }
        Command::Suggest {
            plan,
            not_before,
            today,
        } => {
            let plan = load_plan(&plan);
            let not_before = not_before.as_deref().map(parse_date);
            let today = today
                .as_deref()
                .map(parse_date)
                .unwrap_or_else(|| Zoned::now().date());
            match plan.suggest(today, not_before) {
                Some(best) => println!("{best}"),
                None => println!("no off day in the next 21 days"),
            }
        }
        Command::Week { plan, date } => {
            let plan = load_plan(&plan);
            let anchor = date
                .as_deref()
                .map(parse_date)
                .unwrap_or_else(|| Zoned::now().date());
            for day in week_dates(anchor, 0) {
                let block = plan.resolved_block(day);
                let open = open_hours(&plan.timeline_for(day));
                println!("{day}  {block}  open {open:.1} hr");
            }
        }
    }
}

fn load_plan(path: &Path) -> Plan {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", path.display());
            process::exit(1);
        }
    };
    match Plan::from_json(&text) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn parse_date(text: &str) -> Date {
    match text.parse() {
        Ok(date) => date,
        Err(e) => {
            eprintln!("error: invalid date '{text}': {e}");
            process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: failed to serialize: {e}");
            process::exit(1);
        }
    }
}
