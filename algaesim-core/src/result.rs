//! Simulation output
//!
//! A [`SimulationResult`] is produced once per run and holds every daily series,
//! the harvest log, summary statistics and the seasonal breakdown.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::hashing::{hash_float, hash_floats};
use crate::parameters::{Season, SpeciesParams};
use crate::FloatValue;

/// Output of a complete simulation run.
///
/// Daily series all have length `duration_days` and are indexed by the 0-based
/// simulation day. Seasonal arrays follow [`Season::TRACKED`] order
/// (dry, hot, monsoon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Simulation day of each entry
    /// unit: d
    pub time_days: Vec<FloatValue>,

    /// Biomass concentration at the end of each day, after any harvest reset
    /// unit: g/L
    pub biomass_concentration: Vec<FloatValue>,

    /// Areal productivity of each day
    /// unit: g/m²/day
    pub productivity_areal: Vec<FloatValue>,

    /// Running total of captured CO2 per unit pond area
    /// unit: g/m²
    pub co2_captured_cumulative: Vec<FloatValue>,

    /// CO2 captured on each day
    /// unit: kg
    pub co2_captured_daily: Vec<FloatValue>,

    /// Net specific growth rate of each day
    /// unit: 1/d
    pub growth_rate_daily: Vec<FloatValue>,

    /// 0-based days on which a harvest occurred
    pub harvest_days: Vec<u32>,

    /// Advisory messages, deduplicated and sorted
    pub warnings: Vec<String>,

    /// unit: kg
    pub total_co2_captured_kg: FloatValue,

    /// unit: tCO2e
    pub total_co2_captured_tco2e: FloatValue,

    /// Biomass removed by all harvests
    /// unit: kg
    pub total_biomass_harvested_kg: FloatValue,

    pub harvest_count: u32,

    /// Mean of `productivity_areal`
    /// unit: g/m²/day
    pub avg_daily_productivity: FloatValue,

    pub duration_days: u32,

    pub start_month: u32,

    /// CO2 captured per tracked season
    /// unit: kg
    pub seasonal_co2: [FloatValue; 3],

    /// Mean daily productivity per tracked season, 0 for seasons with no days
    /// unit: g/m²/day
    pub seasonal_productivity: [FloatValue; 3],

    /// Species parameters used for this run
    pub parameters_used: SpeciesParams,
}

impl SimulationResult {
    /// Highest daily areal productivity of the run, 0 for an empty run.
    pub fn peak_productivity(&self) -> FloatValue {
        self.productivity_areal.iter().copied().fold(0.0, FloatValue::max)
    }

    /// CO2 captured in a single tracked season, `None` for [`Season::Custom`].
    pub fn co2_for_season(&self, season: Season) -> Option<FloatValue> {
        season.tracked_index().map(|i| self.seasonal_co2[i])
    }
}

impl Hash for SimulationResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_floats(&self.time_days, state);
        hash_floats(&self.biomass_concentration, state);
        hash_floats(&self.productivity_areal, state);
        hash_floats(&self.co2_captured_cumulative, state);
        hash_floats(&self.co2_captured_daily, state);
        hash_floats(&self.growth_rate_daily, state);
        self.harvest_days.hash(state);
        self.warnings.hash(state);
        hash_float(self.total_co2_captured_kg, state);
        hash_float(self.total_co2_captured_tco2e, state);
        hash_float(self.total_biomass_harvested_kg, state);
        self.harvest_count.hash(state);
        hash_float(self.avg_daily_productivity, state);
        self.duration_days.hash(state);
        self.start_month.hash(state);
        hash_floats(&self.seasonal_co2, state);
        hash_floats(&self.seasonal_productivity, state);
        self.parameters_used.hash(state);
    }
}
