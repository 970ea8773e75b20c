//! Scenario files
//!
//! A scenario file is a TOML document with up to four optional tables:
//!
//! ```toml
//! [config]
//! duration_days = 180
//! start_month = 6
//!
//! [species.growth]
//! I_opt = 100.0
//!
//! [uniform]
//! temp_day = 30.0
//! temp_night = 24.0
//! par = 120.0
//! photoperiod = 12.0
//! ```
//!
//! Missing `config` and `species` tables, or fields within them, take their
//! defaults. A missing `climate` table uses the Surat preset. A `uniform` table
//! replaces every month of the climate with the same conditions.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use algaesim_core::parameters::{CityClimate, SimulationConfig, SpeciesParams};
use algaesim_core::{AlgaeError, AlgaeResult, FloatValue};
use algaesim_pond::presets::{chlorella_vulgaris, surat_climate};
use algaesim_pond::Scenario;

/// Same conditions for every month of the year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformClimate {
    /// unit: °C
    pub temp_day: FloatValue,
    /// unit: °C
    pub temp_night: FloatValue,
    /// unit: µmol/m²/s
    pub par: FloatValue,
    /// unit: h
    pub photoperiod: FloatValue,
}

impl UniformClimate {
    /// Replace every month of `base`, keeping its location and cardinal
    /// temperatures.
    pub fn apply(&self, base: &CityClimate) -> AlgaeResult<CityClimate> {
        base.with_uniform_months(self.temp_day, self.temp_night, self.par, self.photoperiod)
    }
}

/// Parses `temp_day,temp_night,par,photoperiod`.
impl FromStr for UniformClimate {
    type Err = AlgaeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<FloatValue>()
                    .map_err(|e| AlgaeError::Config(format!("Invalid number '{}': {}", v, e)))
            })
            .collect::<AlgaeResult<Vec<_>>>()?;

        match values.as_slice() {
            [temp_day, temp_night, par, photoperiod] => Ok(Self {
                temp_day: *temp_day,
                temp_night: *temp_night,
                par: *par,
                photoperiod: *photoperiod,
            }),
            _ => Err(AlgaeError::Config(format!(
                "Expected temp_day,temp_night,par,photoperiod, got {} values",
                values.len()
            ))),
        }
    }
}

/// Raw contents of a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    #[serde(default)]
    pub config: Option<SimulationConfig>,
    #[serde(default)]
    pub species: Option<SpeciesParams>,
    #[serde(default)]
    pub climate: Option<CityClimate>,
    #[serde(default)]
    pub uniform: Option<UniformClimate>,
}

impl ScenarioFile {
    pub fn from_toml_str(contents: &str) -> AlgaeResult<Self> {
        toml::from_str(contents).map_err(|e| AlgaeError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> AlgaeResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading scenario file");
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> AlgaeResult<String> {
        toml::to_string(self).map_err(|e| AlgaeError::Config(e.to_string()))
    }

    /// Report every invalid `config` value at once rather than only the
    /// first one.
    pub fn check_config(&self) -> AlgaeResult<()> {
        let Some(config) = &self.config else {
            return Ok(());
        };
        let mut errors = config.validation_errors();
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            n => {
                let problems: Vec<String> = errors.iter().map(ToString::to_string).collect();
                Err(AlgaeError::Config(format!(
                    "{} problems: {}",
                    n,
                    problems.join("; ")
                )))
            }
        }
    }

    /// Fill missing tables from the presets and validate the result.
    pub fn into_scenario(self) -> AlgaeResult<Scenario> {
        let config = self.config.unwrap_or_default();
        let species = self.species.unwrap_or_else(chlorella_vulgaris);
        let base_climate = self.climate.unwrap_or_else(surat_climate);
        let climate = match self.uniform {
            Some(uniform) => uniform.apply(&base_climate)?,
            None => base_climate,
        };

        let scenario = Scenario::new(config, species, climate)?;
        info!(
            city = %scenario.climate.city,
            species = %scenario.species.name,
            duration_days = scenario.config.duration_days,
            "Loaded scenario"
        );
        Ok(scenario)
    }
}

/// Read, fill and validate a scenario file.
pub fn load_scenario(path: impl AsRef<Path>) -> AlgaeResult<Scenario> {
    ScenarioFile::from_path(path)?.into_scenario()
}

#[cfg(test)]
mod tests {
    use super::*;
    use algaesim_core::parameters::Season;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_file_uses_presets() {
        let scenario = ScenarioFile::from_toml_str("").unwrap().into_scenario().unwrap();
        assert_eq!(scenario.config, SimulationConfig::default());
        assert_eq!(scenario.species, chlorella_vulgaris());
        assert_eq!(scenario.climate, surat_climate());
    }

    #[test]
    fn test_partial_tables() {
        let toml = r#"
            [config]
            duration_days = 90
            start_month = 6

            [species.growth]
            I_opt = 100.0
        "#;
        let scenario = ScenarioFile::from_toml_str(toml).unwrap().into_scenario().unwrap();

        assert_eq!(scenario.config.duration_days, 90);
        assert_eq!(scenario.config.start_month, 6);
        assert_relative_eq!(scenario.config.depth, 0.3);
        assert_relative_eq!(scenario.species.growth.i_opt, 100.0);
        assert_relative_eq!(scenario.species.growth.mu_max, 1.0);
        assert_eq!(scenario.species.name, "Chlorella vulgaris");
    }

    #[test]
    fn test_uniform_table_overrides_climate() {
        let toml = r#"
            [uniform]
            temp_day = 30.0
            temp_night = 24.0
            par = 120.0
            photoperiod = 12.0
        "#;
        let scenario = ScenarioFile::from_toml_str(toml).unwrap().into_scenario().unwrap();
        assert_eq!(scenario.climate.city, "Surat");
        assert!(scenario.climate.months.iter().all(|m| m.season == Season::Custom));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let toml = r#"
            [config]
            initial_biomass = 3.0
            harvest_threshold = 2.0
        "#;
        let err = ScenarioFile::from_toml_str(toml).unwrap().into_scenario().unwrap_err();
        assert!(matches!(err, AlgaeError::HarvestThreshold { .. }));
    }

    #[test]
    fn test_check_config_reports_every_problem_once() {
        let toml = r#"
            [config]
            depth = -0.3
            surface_area = 0.0
        "#;
        let file = ScenarioFile::from_toml_str(toml).unwrap();
        let message = file.check_config().unwrap_err().to_string();
        assert!(message.contains("2 problems: "), "{}", message);
        assert!(message.contains("depth"), "{}", message);
        assert!(message.contains("surface_area"), "{}", message);
        assert_eq!(message.matches("depth").count(), 1);

        let single = ScenarioFile::from_toml_str("[config]
harvest_threshold = 0.4")
            .unwrap()
            .check_config()
            .unwrap_err();
        assert!(matches!(single, AlgaeError::HarvestThreshold { .. }));

        assert!(ScenarioFile::default().check_config().is_ok());
    }

    #[test]
    fn test_short_climate_table_rejected() {
        let toml = r#"
            [climate]
            city = "Nowhere"
            country = "Nowhere"
            latitude = 0.0
            longitude = 0.0

            [climate.climate_params]
            T_min = 8.0
            T_opt = 28.0
            T_max = 42.0

            [[climate.months]]
            season = "dry"
            temp_day = 30.0
            temp_night = 20.0
            par = 120.0
            photoperiod = 12.0
        "#;
        let err = ScenarioFile::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, AlgaeError::Config(_)));
        assert!(err.to_string().contains("exactly 12 months"), "{}", err);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        assert!(matches!(
            ScenarioFile::from_toml_str("[config\nduration_days = 1"),
            Err(AlgaeError::Config(_))
        ));
        assert!(matches!(
            ScenarioFile::from_toml_str("[pond]\ndepth = 1.0"),
            Err(AlgaeError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScenarioFile::from_path("/nonexistent/scenario.toml").unwrap_err();
        assert!(matches!(err, AlgaeError::Io(_)));
    }

    #[test]
    fn test_toml_round_trip_with_climate() {
        let file = ScenarioFile {
            config: Some(SimulationConfig {
                duration_days: 30,
                ..Default::default()
            }),
            species: None,
            climate: Some(surat_climate()),
            uniform: None,
        };
        let serialised = file.to_toml_string().unwrap();
        let parsed = ScenarioFile::from_toml_str(&serialised).unwrap();

        let climate = parsed.climate.unwrap();
        assert_eq!(climate.months.len(), 12);
        assert_eq!(climate.months[6].season, Season::Monsoon);
        assert_eq!(parsed.config.map(|c| c.duration_days), Some(30));
    }

    #[test]
    fn test_uniform_from_str() {
        let uniform: UniformClimate = "30, 24, 120, 12.5".parse().unwrap();
        assert_relative_eq!(uniform.photoperiod, 12.5);
        assert!("30,24,120".parse::<UniformClimate>().is_err());
        assert!("30,24,abc,12".parse::<UniformClimate>().is_err());
    }
}
