//! algaesim
//!
//! Daily growth and CO2 capture of open microalgae ponds.
//!
//! The model itself lives in two crates re-exported here:
//!
//! - [`algaesim_core`]: parameters, results, errors and content hashing
//! - [`algaesim_pond`]: light, growth, temperature and the simulation engine
//!
//! This crate adds TOML scenario files, a JSON run summary and logging setup
//! for the `algaesim` command-line runner.
//!
//! ```no_run
//! use algaesim::scenario::load_scenario;
//!
//! let scenario = load_scenario("scenario.toml")?;
//! let result = scenario.run();
//! println!("{:.1} kg CO2", result.total_co2_captured_kg);
//! # Ok::<(), algaesim::AlgaeError>(())
//! ```

pub mod logging;
pub mod scenario;
pub mod summary;

pub use algaesim_core;
pub use algaesim_pond;

pub use algaesim_core::parameters::{
    CityClimate, ClimateParams, GrowthParams, LightParams, MonthlyClimate, Season,
    SimulationConfig, SpeciesParams,
};
pub use algaesim_core::{AlgaeError, AlgaeResult, ContentHash, FloatValue, SimulationResult};
pub use algaesim_pond::{run_batch, run_simulation, Scenario};
