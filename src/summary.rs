//! Compact JSON report of a run

use serde::{Deserialize, Serialize};

use algaesim_core::parameters::Season;
use algaesim_core::{FloatValue, SimulationResult};
use algaesim_pond::simulation::month_name;
use algaesim_pond::Scenario;

/// Totals for one tracked season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season: Season,
    /// unit: kg
    pub co2_kg: FloatValue,
    /// unit: g/m²/day
    pub avg_productivity: FloatValue,
}

/// Headline figures of a run, without the daily series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Hex content hash of the scenario
    pub scenario_key: String,
    pub city: String,
    pub species: String,
    pub duration_days: u32,
    pub start_month: String,
    pub harvest_count: u32,
    pub harvest_days: Vec<u32>,
    pub total_co2_captured_kg: FloatValue,
    pub total_co2_captured_tco2e: FloatValue,
    pub total_biomass_harvested_kg: FloatValue,
    pub avg_daily_productivity: FloatValue,
    pub peak_daily_productivity: FloatValue,
    pub final_biomass: FloatValue,
    pub seasons: Vec<SeasonSummary>,
    pub warnings: Vec<String>,
}

impl RunSummary {
    pub fn new(scenario: &Scenario, result: &SimulationResult) -> Self {
        let seasons = Season::TRACKED
            .iter()
            .enumerate()
            .map(|(i, season)| SeasonSummary {
                season: *season,
                co2_kg: result.seasonal_co2[i],
                avg_productivity: result.seasonal_productivity[i],
            })
            .collect();

        Self {
            scenario_key: format!("{:016x}", scenario.key()),
            city: scenario.climate.city.clone(),
            species: result.parameters_used.name.clone(),
            duration_days: result.duration_days,
            start_month: month_name(result.start_month.saturating_sub(1) as usize).to_string(),
            harvest_count: result.harvest_count,
            harvest_days: result.harvest_days.clone(),
            total_co2_captured_kg: result.total_co2_captured_kg,
            total_co2_captured_tco2e: result.total_co2_captured_tco2e,
            total_biomass_harvested_kg: result.total_biomass_harvested_kg,
            avg_daily_productivity: result.avg_daily_productivity,
            peak_daily_productivity: result.peak_productivity(),
            final_biomass: result
                .biomass_concentration
                .last()
                .copied()
                .unwrap_or(scenario.config.initial_biomass),
            seasons,
            warnings: result.warnings.clone(),
        }
    }
}
