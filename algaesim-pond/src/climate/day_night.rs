//! Day/Night Growth Integration
//!
//! Net daily specific growth rate from separate daytime and nighttime
//! temperatures, weighted by photoperiod.
//!
//! # What This Module Does
//!
//! 1. Daytime gross growth: depth-averaged kinetics scaled by the CTMI response
//!    at the daytime temperature
//! 2. Nighttime loss: maintenance respiration scaled by the CTMI response at the
//!    nighttime temperature
//! 3. Net rate:
//!    $$\mu_{net} = \mu_{day} \cdot \frac{P}{24} - r_{night} \cdot \left(1 - \frac{P}{24}\right)$$
//!    clamped at zero
//!
//! Averaging to a single daily temperature would hide the asymmetry between hot
//! afternoons, which inhibit growth strongly, and cooler nights, which only
//! drive moderate respiration.
//!
//! # Differences from a full carbon balance
//!
//! - **Net decay is discarded**: a day whose respiration exceeds its growth
//!   reports zero rather than a negative rate. [`DailyGrowthBreakdown::net`]
//!   keeps the unclamped value for diagnostics.

use algaesim_core::parameters::{ClimateParams, GrowthParams, LightParams, MonthlyClimate};
use algaesim_core::FloatValue;
use serde::{Deserialize, Serialize};

use crate::climate::temperature_modifier;
use crate::growth::depth_averaged_growth_rate;

const HOURS_PER_DAY: FloatValue = 24.0;

/// Weather driving a single simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayConditions {
    /// unit: °C
    pub temp_day: FloatValue,
    /// unit: °C
    pub temp_night: FloatValue,
    /// Surface PAR averaged over daylight hours
    /// unit: µmol/m²/s
    pub par: FloatValue,
    /// unit: h
    pub photoperiod: FloatValue,
}

impl From<&MonthlyClimate> for DayConditions {
    fn from(month: &MonthlyClimate) -> Self {
        Self {
            temp_day: month.temp_day,
            temp_night: month.temp_night,
            par: month.par,
            photoperiod: month.photoperiod,
        }
    }
}

/// Components of a day's net growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyGrowthBreakdown {
    /// Temperature-scaled daytime specific growth rate
    /// unit: 1/d
    pub mu_day: FloatValue,
    /// Temperature-scaled maintenance respiration
    /// unit: 1/d
    pub r_night: FloatValue,
    pub day_fraction: FloatValue,
    pub night_fraction: FloatValue,
    /// Photoperiod-weighted net rate before clamping, may be negative
    /// unit: 1/d
    pub net: FloatValue,
}

impl DailyGrowthBreakdown {
    /// Net rate floored at zero.
    pub fn net_clamped(&self) -> FloatValue {
        self.net.max(0.0)
    }
}

/// Every intermediate of the day/night integration.
///
/// A day with no daylight yields an all-zero breakdown.
pub fn daily_growth_breakdown(
    conditions: &DayConditions,
    co2: FloatValue,
    biomass_conc: FloatValue,
    depth: FloatValue,
    growth: &GrowthParams,
    light: &LightParams,
    climate: &ClimateParams,
) -> DailyGrowthBreakdown {
    if conditions.photoperiod <= 0.0 {
        return DailyGrowthBreakdown::default();
    }

    let f_day = temperature_modifier(conditions.temp_day, climate);
    let mu_base = depth_averaged_growth_rate(conditions.par, co2, biomass_conc, depth, growth, light);
    let mu_day = mu_base * f_day;

    let f_night = temperature_modifier(conditions.temp_night, climate);
    let r_night = growth.r_maintenance * f_night;

    let day_fraction = conditions.photoperiod.min(HOURS_PER_DAY) / HOURS_PER_DAY;
    let night_fraction = 1.0 - day_fraction;

    DailyGrowthBreakdown {
        mu_day,
        r_night,
        day_fraction,
        night_fraction,
        net: mu_day * day_fraction - r_night * night_fraction,
    }
}

/// Net daily specific growth rate (1/d), never negative.
///
/// Returns 0 when `conditions.photoperiod <= 0`.
pub fn daily_growth_rate(
    conditions: &DayConditions,
    co2: FloatValue,
    biomass_conc: FloatValue,
    depth: FloatValue,
    growth: &GrowthParams,
    light: &LightParams,
    climate: &ClimateParams,
) -> FloatValue {
    daily_growth_breakdown(conditions, co2, biomass_conc, depth, growth, light, climate)
        .net_clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use is_close::is_close;

    fn conditions(temp_day: FloatValue, temp_night: FloatValue, photoperiod: FloatValue) -> DayConditions {
        DayConditions {
            temp_day,
            temp_night,
            par: 120.0,
            photoperiod,
        }
    }

    fn rate(c: &DayConditions, co2: FloatValue, biomass: FloatValue) -> FloatValue {
        daily_growth_rate(
            c,
            co2,
            biomass,
            0.3,
            &GrowthParams::default(),
            &LightParams::default(),
            &ClimateParams::default(),
        )
    }

    #[test]
    fn test_zero_photoperiod_no_growth() {
        for (day, night, co2, biomass) in [(28.0, 20.0, 5.0, 1.0), (35.0, 30.0, 50.0, 0.1)] {
            assert_eq!(rate(&conditions(day, night, 0.0), co2, biomass), 0.0);
        }
        assert_eq!(rate(&conditions(28.0, 20.0, -2.0), 5.0, 1.0), 0.0);
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let b = daily_growth_breakdown(
            &conditions(28.0, 20.0, 13.0),
            5.0,
            1.0,
            0.3,
            &GrowthParams::default(),
            &LightParams::default(),
            &ClimateParams::default(),
        );
        assert_relative_eq!(b.day_fraction + b.night_fraction, 1.0);
        assert_relative_eq!(b.day_fraction, 13.0 / 24.0);
        assert!(is_close!(
            b.net,
            b.mu_day * b.day_fraction - b.r_night * b.night_fraction
        ));
    }

    #[test]
    fn test_photoperiod_capped_at_full_day() {
        let b = daily_growth_breakdown(
            &conditions(28.0, 20.0, 30.0),
            5.0,
            1.0,
            0.3,
            &GrowthParams::default(),
            &LightParams::default(),
            &ClimateParams::default(),
        );
        assert_eq!(b.day_fraction, 1.0);
        assert_eq!(b.night_fraction, 0.0);
    }

    #[test]
    fn test_net_decay_is_clamped() {
        // Lethal daytime heat, respiring night
        let b = daily_growth_breakdown(
            &conditions(45.0, 28.0, 12.0),
            5.0,
            1.0,
            0.3,
            &GrowthParams::default(),
            &LightParams::default(),
            &ClimateParams::default(),
        );
        assert_eq!(b.mu_day, 0.0);
        assert!(b.net < 0.0);
        assert_eq!(b.net_clamped(), 0.0);
    }

    #[test]
    fn test_optimal_day_beats_hot_day() {
        let optimal = rate(&conditions(28.0, 20.0, 12.0), 5.0, 1.0);
        let hot = rate(&conditions(40.0, 20.0, 12.0), 5.0, 1.0);
        assert!(optimal > hot, "optimal={} hot={}", optimal, hot);
    }

    #[test]
    fn test_conditions_from_month() {
        let month = MonthlyClimate::new(
            algaesim_core::parameters::Season::Hot,
            38.0,
            25.0,
            140.0,
            12.6,
            5.0,
            0.1,
        )
        .unwrap();
        let c = DayConditions::from(&month);
        assert_eq!(c.temp_day, 38.0);
        assert_eq!(c.par, 140.0);
        assert_eq!(c.photoperiod, 12.6);
    }
}
