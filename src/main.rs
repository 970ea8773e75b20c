//! algaesim command-line runner
//!
//! Runs one pond scenario and prints a JSON summary to stdout.
//!
//! # Usage
//!
//! ```bash
//! algaesim --scenario pond.toml --days 180 --co2 8.0 --pretty
//! algaesim --uniform-climate 30,24,120,12 -v
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use algaesim::logging::init_logging;
use algaesim::scenario::{ScenarioFile, UniformClimate};
use algaesim::summary::RunSummary;
use algaesim::algaesim_core::parameters::parse_duration;
use algaesim::{AlgaeError, AlgaeResult, FloatValue};

/// Open-pond microalgae growth and CO2 capture simulator
#[derive(Parser, Debug)]
#[command(name = "algaesim")]
#[command(about = "Simulate daily microalgae growth and CO2 capture in an open pond")]
struct Args {
    /// TOML scenario file; presets are used for anything it omits
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of simulated days, or a preset: "1 month", "3 months",
    /// "6 months", "1 year"
    #[arg(long, value_parser = parse_duration)]
    days: Option<u32>,

    /// Calendar month of the first day (1 = January)
    #[arg(long)]
    start_month: Option<u32>,

    /// Dissolved CO2 concentration [mg/L]
    #[arg(long)]
    co2: Option<FloatValue>,

    /// Pond depth [m]
    #[arg(long)]
    depth: Option<FloatValue>,

    /// Pond surface area [m²]
    #[arg(long)]
    area: Option<FloatValue>,

    /// Harvest threshold [g/L]
    #[arg(long)]
    threshold: Option<FloatValue>,

    /// Replace every month with temp_day,temp_night,par,photoperiod
    #[arg(long, value_name = "T_DAY,T_NIGHT,PAR,HOURS")]
    uniform_climate: Option<UniformClimate>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn scenario_file(&self) -> AlgaeResult<ScenarioFile> {
        let mut file = match &self.scenario {
            Some(path) => ScenarioFile::from_path(path)?,
            None => ScenarioFile::default(),
        };

        let config = file.config.get_or_insert_with(Default::default);
        if let Some(days) = self.days {
            config.duration_days = days;
        }
        if let Some(month) = self.start_month {
            config.start_month = month;
        }
        if let Some(co2) = self.co2 {
            config.co2_concentration = co2;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(area) = self.area {
            config.surface_area = area;
        }
        if let Some(threshold) = self.threshold {
            config.harvest_threshold = threshold;
        }
        if let Some(uniform) = self.uniform_climate {
            file.uniform = Some(uniform);
        }

        Ok(file)
    }
}

fn run(args: &Args) -> AlgaeResult<String> {
    let file = args.scenario_file()?;
    file.check_config()?;

    let scenario = file.into_scenario()?;
    let result = scenario.run();
    info!(
        harvest_count = result.harvest_count,
        total_co2_kg = result.total_co2_captured_kg,
        "Run finished"
    );

    let summary = RunSummary::new(&scenario, &result);
    let json = if args.pretty {
        serde_json::to_string_pretty(&summary)
    } else {
        serde_json::to_string(&summary)
    };
    json.map_err(|e| AlgaeError::Config(format!("Failed to serialise summary: {}", e)))
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("{}", e);
    }

    match run(&args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
