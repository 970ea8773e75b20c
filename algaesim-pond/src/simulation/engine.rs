//! Daily Simulation Engine
//!
//! Explicit Euler integration of pond biomass at a one-day step, with harvest
//! cycling, CO2 accounting and seasonal aggregation.
//!
//! # Algorithm
//!
//! For each day $d$, with biomass $X_d$ (g/L):
//!
//! 1. Look up the calendar month of $d$ and its climate
//! 2. Compute the net growth rate $\mu_d$ from the day/night integrator
//! 3. Record productivity and CO2 capture from the pre-step biomass
//! 4. Step: $X_{d+1} = \max(X_d + \mu_d X_d, 0)$
//! 5. If $X_{d+1}$ reaches the harvest threshold, remove everything above the
//!    inoculum and reset to the initial biomass
//!
//! The loop is a pure function of its inputs. It performs no I/O and never
//! fails; inputs are expected to have passed validation.

use algaesim_core::parameters::{CityClimate, SimulationConfig, SpeciesParams};
use algaesim_core::{FloatValue, SimulationResult};
use tracing::{debug, trace};

use crate::climate::{daily_growth_rate, DayConditions};
use crate::growth::{areal_productivity, productivity_warnings};
use crate::simulation::calendar::day_to_month_map;
use crate::simulation::seasonal::SeasonalAccumulator;

const GRAMS_PER_KG: FloatValue = 1000.0;
const KG_PER_TONNE: FloatValue = 1000.0;

/// Euler time step
/// unit: d
const DT: FloatValue = 1.0;

/// Run a complete simulation.
///
/// The returned series all have `config.duration_days` entries. Biomass on a
/// harvest day is recorded after the reset.
pub fn run_simulation(
    config: &SimulationConfig,
    species: &SpeciesParams,
    climate: &CityClimate,
) -> SimulationResult {
    let n = config.duration_days as usize;
    let day_to_month = day_to_month_map(config.start_month, config.duration_days);
    let volume_liters = config.volume_liters();

    let mut biomass = config.initial_biomass;
    let mut harvested_g = 0.0;
    let mut harvest_days = Vec::new();

    let mut time_days = Vec::with_capacity(n);
    let mut biomass_concentration = Vec::with_capacity(n);
    let mut growth_rate_daily = Vec::with_capacity(n);
    let mut co2_captured_daily = Vec::with_capacity(n);
    let mut productivity_areal = Vec::with_capacity(n);
    let mut warnings = Vec::new();

    for (day, month_index) in day_to_month.iter().enumerate() {
        let month = climate.month(*month_index);

        let mu_net = daily_growth_rate(
            &DayConditions::from(month),
            config.co2_concentration,
            biomass,
            config.depth,
            &species.growth,
            &species.light,
            &climate.climate_params,
        );

        let productivity = areal_productivity(mu_net, biomass, config.depth);
        let co2_kg = if mu_net > 0.0 {
            mu_net * biomass * volume_liters * species.co2_to_biomass_ratio / GRAMS_PER_KG
        } else {
            0.0
        };

        let mut biomass_new = (biomass + mu_net * biomass * DT).max(0.0);

        if biomass_new >= config.harvest_threshold {
            let removed_g = (biomass_new - config.initial_biomass) * volume_liters;
            harvested_g += removed_g;
            biomass_new = config.initial_biomass;
            harvest_days.push(day as u32);
            trace!(day, removed_kg = removed_g / GRAMS_PER_KG, "Harvest");
        }

        time_days.push(day as FloatValue);
        biomass_concentration.push(biomass_new);
        growth_rate_daily.push(mu_net);
        co2_captured_daily.push(co2_kg);
        productivity_areal.push(productivity);
        warnings.extend(productivity_warnings(productivity));

        biomass = biomass_new;
    }

    let total_co2_captured_kg: FloatValue = co2_captured_daily.iter().sum();
    let avg_daily_productivity = if n > 0 {
        productivity_areal.iter().sum::<FloatValue>() / n as FloatValue
    } else {
        0.0
    };

    let co2_captured_cumulative = co2_captured_daily
        .iter()
        .scan(0.0, |running, kg| {
            *running += kg * GRAMS_PER_KG / config.surface_area;
            Some(*running)
        })
        .collect();

    let mut seasons = SeasonalAccumulator::new();
    for (day, month_index) in day_to_month.iter().enumerate() {
        seasons.add(
            climate.month(*month_index).season,
            co2_captured_daily[day],
            productivity_areal[day],
        );
    }

    warnings.sort();
    warnings.dedup();

    let harvest_count = harvest_days.len() as u32;
    debug!(
        city = %climate.city,
        species = %species.name,
        duration_days = config.duration_days,
        harvest_count,
        total_co2_kg = total_co2_captured_kg,
        avg_productivity = avg_daily_productivity,
        "Simulation complete"
    );

    SimulationResult {
        time_days,
        biomass_concentration,
        productivity_areal,
        co2_captured_cumulative,
        co2_captured_daily,
        growth_rate_daily,
        harvest_days,
        warnings,
        total_co2_captured_kg,
        total_co2_captured_tco2e: total_co2_captured_kg / KG_PER_TONNE,
        total_biomass_harvested_kg: harvested_g / GRAMS_PER_KG,
        harvest_count,
        avg_daily_productivity,
        duration_days: config.duration_days,
        start_month: config.start_month,
        seasonal_co2: seasons.co2(),
        seasonal_productivity: seasons.mean_productivity(),
        parameters_used: species.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algaesim_core::parameters::{ClimateParams, MonthlyClimate, Season};

    fn constant_climate(season: Season, temp: FloatValue, par: FloatValue) -> CityClimate {
        let month = MonthlyClimate::new(season, temp, temp - 6.0, par, 12.0, 0.0, 0.0).unwrap();
        CityClimate::new(
            "Testville",
            "Nowhere",
            0.0,
            0.0,
            ClimateParams::default(),
            vec![month; 12],
        )
        .unwrap()
    }

    #[test]
    fn test_series_lengths() {
        let config = SimulationConfig {
            duration_days: 45,
            ..Default::default()
        };
        let result = run_simulation(
            &config,
            &SpeciesParams::default(),
            &constant_climate(Season::Dry, 28.0, 120.0),
        );
        assert_eq!(result.time_days.len(), 45);
        assert_eq!(result.biomass_concentration.len(), 45);
        assert_eq!(result.productivity_areal.len(), 45);
        assert_eq!(result.co2_captured_cumulative.len(), 45);
        assert_eq!(result.co2_captured_daily.len(), 45);
        assert_eq!(result.growth_rate_daily.len(), 45);
        assert_eq!(result.time_days[44], 44.0);
    }

    #[test]
    fn test_first_day_uses_initial_biomass() {
        let config = SimulationConfig {
            duration_days: 1,
            ..Default::default()
        };
        let species = SpeciesParams::default();
        let climate = constant_climate(Season::Hot, 28.0, 120.0);
        let result = run_simulation(&config, &species, &climate);

        let mu = result.growth_rate_daily[0];
        assert!(mu > 0.0);
        let expected = config.initial_biomass * (1.0 + mu);
        assert!((result.biomass_concentration[0] - expected).abs() < 1e-12);
        assert!(
            (result.productivity_areal[0] - areal_productivity(mu, 0.5, config.depth)).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_no_light_no_capture() {
        let config = SimulationConfig {
            duration_days: 30,
            ..Default::default()
        };
        let result = run_simulation(
            &config,
            &SpeciesParams::default(),
            &constant_climate(Season::Dry, 28.0, 0.0),
        );
        assert_eq!(result.total_co2_captured_kg, 0.0);
        assert!(result
            .biomass_concentration
            .iter()
            .all(|x| (*x - config.initial_biomass).abs() < 1e-12));
    }

    #[test]
    fn test_low_threshold_harvests_and_warns_once() {
        // High PAR dense-ish culture trips both the harvest and the warning threshold
        let config = SimulationConfig {
            duration_days: 60,
            initial_biomass: 3.0,
            harvest_threshold: 3.05,
            ..Default::default()
        };
        let species = SpeciesParams {
            growth: algaesim_core::parameters::GrowthParams {
                discount_factor: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = run_simulation(&config, &species, &constant_climate(Season::Dry, 28.0, 500.0));

        assert!(result.harvest_count > 0);
        assert_eq!(result.harvest_count as usize, result.harvest_days.len());
        assert!(result.total_biomass_harvested_kg > 0.0);
        assert!(result.peak_productivity() > 10.0);
        assert_eq!(result.warnings.len(), 1);
    }
}
