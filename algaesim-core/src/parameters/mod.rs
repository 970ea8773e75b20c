//! Simulation input parameters
//!
//! Each parameter struct provides defaults describing a *Chlorella vulgaris*
//! raceway pond, a validating constructor, and a float-aware [`Hash`]
//! implementation so that complete inputs can key an external cache.
//!
//! [`Hash`]: std::hash::Hash

mod climate;
mod config;
mod growth;
mod light;
mod species;

pub use climate::{CityClimate, ClimateParams, MonthlyClimate, Season, MONTHS_PER_YEAR};
pub use config::{parse_duration, SimulationConfig, DURATION_PRESETS};
pub use growth::GrowthParams;
pub use light::LightParams;
pub use species::{SpeciesParams, CO2_PER_CARBON};
