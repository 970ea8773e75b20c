//! Simulation Configuration
//!
//! Run length, pond geometry and operating conditions chosen by the user.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, ensure_positive, AlgaeError, AlgaeResult};
use crate::hashing::hash_float;
use crate::FloatValue;

/// Named run lengths offered to users, in days.
pub const DURATION_PRESETS: [(&str, u32); 4] = [
    ("1 month", 30),
    ("3 months", 90),
    ("6 months", 180),
    ("1 year", 365),
];

/// Parse a run length given either as a number of days or as one of the
/// [`DURATION_PRESETS`] labels (case and spacing are ignored, so `1year`
/// and `"3 Months"` both work).
pub fn parse_duration(value: &str) -> AlgaeResult<u32> {
    let value = value.trim();
    if let Ok(days) = value.parse::<u32>() {
        return Ok(days);
    }

    let key: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    DURATION_PRESETS
        .iter()
        .find(|(label, _)| label.replace(' ', "") == key)
        .map(|(_, days)| *days)
        .ok_or_else(|| {
            let labels: Vec<&str> = DURATION_PRESETS.iter().map(|(label, _)| *label).collect();
            AlgaeError::Config(format!(
                "Invalid duration '{}': expected a number of days or one of {}",
                value,
                labels.join(", ")
            ))
        })
}

/// User-configurable simulation settings.
///
/// Defaults describe a typical raceway pond: 100 m² at 0.3 m depth,
/// inoculated at 0.5 g/L and harvested at 2.0 g/L under continuous CO2
/// injection at 5 mg/L, simulated for one year from January.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of simulated days, at least 1
    pub duration_days: u32,

    /// Calendar month of day 0, 1 = January
    pub start_month: u32,

    /// Inoculation and post-harvest biomass concentration
    /// unit: g/L
    pub initial_biomass: FloatValue,

    /// Biomass concentration that triggers a harvest
    /// unit: g/L
    pub harvest_threshold: FloatValue,

    /// Dissolved CO2 concentration maintained in the pond
    /// unit: mg/L
    pub co2_concentration: FloatValue,

    /// Pond depth
    /// unit: m
    pub depth: FloatValue,

    /// Pond surface area
    /// unit: m²
    pub surface_area: FloatValue,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_days: 365,
            start_month: 1,
            initial_biomass: 0.5,
            harvest_threshold: 2.0,
            co2_concentration: 5.0,
            depth: 0.3,
            surface_area: 100.0,
        }
    }
}

impl SimulationConfig {
    pub fn new(
        duration_days: u32,
        start_month: u32,
        initial_biomass: FloatValue,
        harvest_threshold: FloatValue,
        co2_concentration: FloatValue,
        depth: FloatValue,
        surface_area: FloatValue,
    ) -> AlgaeResult<Self> {
        let config = Self {
            duration_days,
            start_month,
            initial_biomass,
            harvest_threshold,
            co2_concentration,
            depth,
            surface_area,
        };
        config.validate()?;
        Ok(config)
    }

    /// Return the first violated constraint, if any.
    pub fn validate(&self) -> AlgaeResult<()> {
        match self.validation_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Collect every violated constraint.
    pub fn validation_errors(&self) -> Vec<AlgaeError> {
        let mut errors = Vec::new();

        if self.duration_days < 1 {
            errors.push(AlgaeError::OutOfRange {
                name: "duration_days",
                value: self.duration_days as FloatValue,
                min: 1.0,
                max: FloatValue::from(u32::MAX),
            });
        }
        if !(1..=12).contains(&self.start_month) {
            errors.push(AlgaeError::OutOfRange {
                name: "start_month",
                value: self.start_month as FloatValue,
                min: 1.0,
                max: 12.0,
            });
        }

        let checks = [
            ensure_positive("surface_area", self.surface_area),
            ensure_positive("depth", self.depth),
            ensure_positive("initial_biomass", self.initial_biomass),
            ensure_positive("harvest_threshold", self.harvest_threshold),
            ensure_non_negative("co2_concentration", self.co2_concentration),
        ];
        errors.extend(checks.into_iter().filter_map(Result::err));

        if self.harvest_threshold <= self.initial_biomass {
            errors.push(AlgaeError::HarvestThreshold {
                threshold: self.harvest_threshold,
                initial: self.initial_biomass,
            });
        }

        errors
    }

    /// Culture volume in litres (surface area × depth × 1000 L/m³).
    pub fn volume_liters(&self) -> FloatValue {
        self.surface_area * self.depth * 1000.0
    }
}

impl Hash for SimulationConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.duration_days.hash(state);
        self.start_month.hash(state);
        hash_float(self.initial_biomass, state);
        hash_float(self.harvest_threshold, state);
        hash_float(self.co2_concentration, state);
        hash_float(self.depth, state);
        hash_float(self.surface_area, state);
    }
}
