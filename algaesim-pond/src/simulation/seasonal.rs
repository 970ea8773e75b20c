//! Seasonal aggregation of daily CO2 capture and productivity

use algaesim_core::parameters::Season;
use algaesim_core::FloatValue;

const N_TRACKED: usize = Season::TRACKED.len();

/// Accumulates daily values into the [`Season::TRACKED`] buckets.
///
/// Days tagged [`Season::Custom`] are ignored.
#[derive(Debug, Clone, Default)]
pub struct SeasonalAccumulator {
    co2: [FloatValue; N_TRACKED],
    productivity_sum: [FloatValue; N_TRACKED],
    days: [u32; N_TRACKED],
}

impl SeasonalAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one day's CO2 capture (kg) and areal productivity (g/m²/day).
    pub fn add(&mut self, season: Season, co2_kg: FloatValue, productivity: FloatValue) {
        if let Some(i) = season.tracked_index() {
            self.co2[i] += co2_kg;
            self.productivity_sum[i] += productivity;
            self.days[i] += 1;
        }
    }

    /// Days recorded for a season, 0 for [`Season::Custom`].
    pub fn day_count(&self, season: Season) -> u32 {
        season.tracked_index().map_or(0, |i| self.days[i])
    }

    /// Total CO2 per tracked season (kg).
    pub fn co2(&self) -> [FloatValue; N_TRACKED] {
        self.co2
    }

    /// Mean daily productivity per tracked season, 0 where no days fell.
    pub fn mean_productivity(&self) -> [FloatValue; N_TRACKED] {
        let mut means = [0.0; N_TRACKED];
        for (i, mean) in means.iter_mut().enumerate() {
            if self.days[i] > 0 {
                *mean = self.productivity_sum[i] / FloatValue::from(self.days[i]);
            }
        }
        means
    }
}
