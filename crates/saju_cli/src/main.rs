use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use saju_base::{Gender, Stem};
use saju_config::SajuConfig;
use saju_search::{
    BirthInput, SajuEngine, chart_for_birth, day_fortune, month_fortune, parse_clock,
    year_month_fortunes,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_CALENDAR_PATH: &str = "data/manselyeog_1900.csv";
const DEFAULT_SOLAR_TERMS_PATH: &str = "data/solar_terms_1900_2050.json";

#[derive(Parser)]
#[command(name = "saju", about = "Sexagenary four-pillar chart CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Calendar CSV (overrides the config file)
    #[arg(long, global = true)]
    calendar: Option<PathBuf>,
    /// Solar-term JSON (overrides the config file)
    #[arg(long, global = true)]
    solar_terms: Option<PathBuf>,
    /// Ten-gods JSON table (built-in table when omitted)
    #[arg(long, global = true)]
    ten_gods: Option<PathBuf>,
    /// Twelve-stages JSON table (built-in table when omitted)
    #[arg(long, global = true)]
    life_stages: Option<PathBuf>,
    /// Reference year for the yearly outlook
    #[arg(long, global = true)]
    reference_year: Option<i32>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart with destiny cycle and yearly outlook
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
        /// Birth time HH:MM; x, ? or - for unknown
        #[arg(long, default_value = "x")]
        time: String,
        /// male|female|1|2
        #[arg(long, value_parser = parse_gender)]
        gender: Gender,
    },
    /// Day pillar of a date against a day stem
    Day {
        /// Natal day stem (hanja)
        #[arg(long, value_parser = parse_stem)]
        day_stem: Stem,
        /// male|female|1|2
        #[arg(long, value_parser = parse_gender)]
        gender: Gender,
        /// Reference date (YYYY-MM-DD), default today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
    /// Month pillar in force on a date against a day stem
    Month {
        /// Natal day stem (hanja)
        #[arg(long, value_parser = parse_stem)]
        day_stem: Stem,
        /// male|female|1|2
        #[arg(long, value_parser = parse_gender)]
        gender: Gender,
        /// Reference date (YYYY-MM-DD), default today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
    /// Up to 13 month-pillar windows from January of a year
    YearMonths {
        /// Calendar year
        year: i32,
        /// Natal day stem (hanja)
        #[arg(long, value_parser = parse_stem)]
        day_stem: Stem,
    },
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| format!("{e} (expected YYYY-MM-DD)"))
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_stem(s: &str) -> Result<Stem, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn build_config(cli: &Cli) -> SajuConfig {
    let mut config = match &cli.config {
        Some(path) => SajuConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => SajuConfig::with_paths(
            PathBuf::from(DEFAULT_CALENDAR_PATH),
            PathBuf::from(DEFAULT_SOLAR_TERMS_PATH),
        ),
    };
    if let Some(p) = &cli.calendar {
        config.calendar_path = p.clone();
    }
    if let Some(p) = &cli.solar_terms {
        config.solar_terms_path = p.clone();
    }
    if let Some(p) = &cli.ten_gods {
        config.ten_gods_path = Some(p.clone());
    }
    if let Some(p) = &cli.life_stages {
        config.life_stages_path = Some(p.clone());
    }
    if let Some(y) = cli.reference_year {
        config.reference_year = y;
    }
    config
}

fn load_engine(config: &SajuConfig) -> SajuEngine {
    SajuEngine::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to load engine: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn exit_on_error<T>(result: Result<T, saju_search::SearchError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli);
    let engine = load_engine(&config);
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Chart { date, time, gender } => {
            let clock = exit_on_error(parse_clock(&time));
            let input = BirthInput {
                year: date.year(),
                month: date.month(),
                day: date.day(),
                hour: clock.map(|(h, _)| h),
                minute: clock.map(|(_, m)| m),
                gender,
            };
            debug!(?input, "chart request");
            print_json(&exit_on_error(chart_for_birth(&engine, &input)));
        }

        Commands::Day {
            day_stem,
            gender,
            date,
        } => {
            let date = date.unwrap_or(today);
            print_json(&exit_on_error(day_fortune(&engine, day_stem, gender, date)));
        }

        Commands::Month {
            day_stem,
            gender,
            date,
        } => {
            let date = date.unwrap_or(today);
            print_json(&exit_on_error(month_fortune(&engine, day_stem, gender, date)));
        }

        Commands::YearMonths { year, day_stem } => {
            print_json(&exit_on_error(year_month_fortunes(&engine, day_stem, year)));
        }
    }
}
