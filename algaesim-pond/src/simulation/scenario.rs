//! Validated simulation inputs

use serde::{Deserialize, Serialize};

use algaesim_core::parameters::{CityClimate, SimulationConfig, SpeciesParams};
use algaesim_core::{AlgaeError, AlgaeResult, ContentHash, SimulationResult};

use crate::simulation::engine::run_simulation;

/// The `(config, species, climate)` triple that fully determines one run.
///
/// Identical scenarios always produce equal results, so
/// [`ContentHash::content_hash`] of a scenario is a valid cache key for its
/// [`SimulationResult`]. Deserialisation runs [`Scenario::validate`].
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedScenario")]
pub struct Scenario {
    pub config: SimulationConfig,
    pub species: SpeciesParams,
    pub climate: CityClimate,
}

impl Scenario {
    /// Bundle and validate a complete set of inputs.
    pub fn new(
        config: SimulationConfig,
        species: SpeciesParams,
        climate: CityClimate,
    ) -> AlgaeResult<Self> {
        let scenario = Self {
            config,
            species,
            climate,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> AlgaeResult<()> {
        self.config.validate()?;
        self.species.validate()?;
        self.climate.validate()
    }

    /// Cache key derived from every input value.
    pub fn key(&self) -> u64 {
        self.content_hash()
    }

    pub fn run(&self) -> SimulationResult {
        run_simulation(&self.config, &self.species, &self.climate)
    }
}

#[derive(Deserialize)]
struct UncheckedScenario {
    config: SimulationConfig,
    species: SpeciesParams,
    climate: CityClimate,
}

impl TryFrom<UncheckedScenario> for Scenario {
    type Error = AlgaeError;

    fn try_from(raw: UncheckedScenario) -> AlgaeResult<Self> {
        Self::new(raw.config, raw.species, raw.climate)
    }
}
