//! hotel-runner: headless query runner for the hotel optimizer.
//!
//! Usage:
//!   hotel-runner --data-dir ./data                       (dashboard summary)
//!   hotel-runner --pricing --hotel HOTEL0007 --date 2025-07-04
//!   hotel-runner --staffing --hotel HOTEL0007
//!   hotel-runner --events | --locations
//!   hotel-runner --ipc-mode --seed 12345

use anyhow::{bail, Result};
use chrono::NaiveDate;
use hotel_optimizer_core::{
    clock::ForecastClock,
    config::OptimizerConfig,
    engine::OptimizerEngine,
    error::OptimizerError,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Summary,
    Pricing {
        #[serde(default)]
        hotel_id: Option<String>,
        #[serde(default)]
        date: Option<String>,
    },
    Staffing {
        #[serde(default)]
        hotel_id: Option<String>,
        #[serde(default)]
        date: Option<String>,
    },
    Forecast {
        #[serde(default)]
        hotel_id: Option<String>,
    },
    HotelsWithEvents,
    Locations,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = has_flag(&args, "--ipc-mode");
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");

    let config = match flag_value(&args, "--config") {
        Some(path) => OptimizerConfig::load(Path::new(path))?,
        None => OptimizerConfig::default(),
    };
    let seed = parse_arg(&args, "--seed", config.seed.unwrap_or_else(wall_clock_seed));

    if !ipc_mode {
        println!("Hotel Optimizer: hotel-runner");
        println!("  seed:      {seed}");
        println!("  data_dir:  {data_dir}");
        println!();
    }

    let mut engine = OptimizerEngine::build(
        Path::new(data_dir),
        config,
        ForecastClock::system(),
        seed,
    )?;

    if ipc_mode {
        return run_ipc_loop(&mut engine);
    }

    let date = flag_value(&args, "--date").map(parse_date).transpose()?;
    let hotel_id = flag_value(&args, "--hotel").map(String::from);

    let output = if has_flag(&args, "--pricing") {
        let hotel_id = resolve_hotel(&engine, hotel_id)?;
        serde_json::to_string_pretty(&engine.pricing_report(&hotel_id, date)?)?
    } else if has_flag(&args, "--staffing") {
        let hotel_id = resolve_hotel(&engine, hotel_id)?;
        serde_json::to_string_pretty(&engine.staffing_report(&hotel_id, date)?)?
    } else if has_flag(&args, "--events") {
        serde_json::to_string_pretty(&engine.hotels_with_events())?
    } else if has_flag(&args, "--locations") {
        serde_json::to_string_pretty(&engine.location_report())?
    } else {
        print_summary(&mut engine);
        return Ok(());
    };
    println!("{output}");
    Ok(())
}

fn run_ipc_loop(engine: &mut OptimizerEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        match handle_command(engine, cmd) {
            Ok(reply) => writeln!(stdout, "{reply}")?,
            Err(e) => {
                log::warn!("ipc command failed: {e}");
                write_error(&mut stdout, &e.to_string())?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn handle_command(engine: &mut OptimizerEngine, cmd: IpcCommand) -> Result<serde_json::Value> {
    let reply = match cmd {
        IpcCommand::Summary => serde_json::to_value(engine.summary())?,
        IpcCommand::Pricing { hotel_id, date } => {
            let hotel_id = resolve_hotel(engine, hotel_id)?;
            let date = date.as_deref().map(parse_date).transpose()?;
            serde_json::to_value(engine.pricing_report(&hotel_id, date)?)?
        }
        IpcCommand::Staffing { hotel_id, date } => {
            let hotel_id = resolve_hotel(engine, hotel_id)?;
            let date = date.as_deref().map(parse_date).transpose()?;
            serde_json::to_value(engine.staffing_report(&hotel_id, date)?)?
        }
        IpcCommand::Forecast { hotel_id } => {
            let hotel_id = resolve_hotel(engine, hotel_id)?;
            serde_json::to_value(engine.price_forecast(&hotel_id)?)?
        }
        IpcCommand::HotelsWithEvents => serde_json::to_value(engine.hotels_with_events())?,
        IpcCommand::Locations => serde_json::to_value(engine.location_report())?,
        IpcCommand::Quit => bail!("quit is handled by the loop"),
    };
    Ok(reply)
}

fn resolve_hotel(engine: &OptimizerEngine, hotel_id: Option<String>) -> Result<String> {
    match hotel_id {
        Some(id) => Ok(id),
        None => Ok(engine.default_hotel_id()?.to_string()),
    }
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{err_json}")?;
    stdout.flush()?;
    Ok(())
}

fn print_summary(engine: &mut OptimizerEngine) {
    let summary = engine.summary();
    let with_events = engine.hotels_with_events();

    println!("=== PORTFOLIO SUMMARY ===");
    println!("  today:              {}", engine.clock.today);
    println!("  hotels:             {}", summary.hotel_count);
    println!("  countries:          {}", summary.country_count);
    println!("  total rooms:        {}", summary.total_rooms);
    println!("  hotels with events: {}", with_events.len());

    println!();
    println!("=== SAMPLE HOTELS ===");
    if summary.hotels.is_empty() {
        println!("  (No hotels loaded)");
    }
    for hotel in &summary.hotels {
        println!(
            "  {} | {} | {} ({:?}) | {} rooms | rating {:.1}",
            hotel.hotel_id, hotel.name, hotel.location, hotel.country, hotel.rooms, hotel.rating
        );
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, OptimizerError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| OptimizerError::InvalidDate { input: input.to_string() })
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn wall_clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
