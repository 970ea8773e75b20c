//! Climate Parameters
//!
//! Cardinal temperatures and the monthly climate profile of a pond location.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, ensure_non_negative, AlgaeError, AlgaeResult};
use crate::hashing::hash_float;
use crate::FloatValue;

/// Number of monthly entries in a [`CityClimate`].
pub const MONTHS_PER_YEAR: usize = 12;

/// Season tag attached to each month of a climate profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Dry,
    Hot,
    Monsoon,
    /// User-supplied uniform climate with no seasonal structure
    Custom,
}

impl Season {
    /// Seasons reported in the seasonal breakdown, in output order.
    pub const TRACKED: [Season; 3] = [Season::Dry, Season::Hot, Season::Monsoon];

    /// Position of this season in [`Season::TRACKED`], if it is tracked.
    pub fn tracked_index(self) -> Option<usize> {
        Self::TRACKED.iter().position(|s| *s == self)
    }
}

impl FromStr for Season {
    type Err = AlgaeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dry" => Ok(Season::Dry),
            "hot" => Ok(Season::Hot),
            "monsoon" => Ok(Season::Monsoon),
            "custom" => Ok(Season::Custom),
            _ => Err(AlgaeError::Config(format!("Unknown season: {}", s))),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Dry => write!(f, "dry"),
            Season::Hot => write!(f, "hot"),
            Season::Monsoon => write!(f, "monsoon"),
            Season::Custom => write!(f, "custom"),
        }
    }
}

/// Cardinal temperatures of the CTMI temperature response.
///
/// Construction and deserialisation enforce $T_{min} < T_{opt} < T_{max}$;
/// the response is undefined for any other ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedClimateParams")]
pub struct ClimateParams {
    /// Lower cardinal temperature, no growth at or below
    /// unit: °C
    /// default: 8.0
    #[serde(rename = "T_min", alias = "t_min")]
    pub t_min: FloatValue,

    /// Optimal growth temperature
    /// unit: °C
    /// default: 28.0
    #[serde(rename = "T_opt", alias = "t_opt")]
    pub t_opt: FloatValue,

    /// Upper cardinal temperature, no growth at or above
    /// unit: °C
    /// default: 42.0
    #[serde(rename = "T_max", alias = "t_max")]
    pub t_max: FloatValue,
}

impl Default for ClimateParams {
    fn default() -> Self {
        Self {
            t_min: 8.0,
            t_opt: 28.0,
            t_max: 42.0,
        }
    }
}

impl ClimateParams {
    pub fn new(t_min: FloatValue, t_opt: FloatValue, t_max: FloatValue) -> AlgaeResult<Self> {
        let params = Self { t_min, t_opt, t_max };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> AlgaeResult<()> {
        ensure_finite("T_min", self.t_min)?;
        ensure_finite("T_opt", self.t_opt)?;
        ensure_finite("T_max", self.t_max)?;
        if self.t_min < self.t_opt && self.t_opt < self.t_max {
            Ok(())
        } else {
            Err(AlgaeError::InvalidCardinalTemperatures {
                t_min: self.t_min,
                t_opt: self.t_opt,
                t_max: self.t_max,
            })
        }
    }
}

/// Serialised form of [`ClimateParams`] before the ordering check.
#[derive(Deserialize)]
#[serde(default)]
struct UncheckedClimateParams {
    #[serde(rename = "T_min", alias = "t_min")]
    t_min: FloatValue,
    #[serde(rename = "T_opt", alias = "t_opt")]
    t_opt: FloatValue,
    #[serde(rename = "T_max", alias = "t_max")]
    t_max: FloatValue,
}

impl Default for UncheckedClimateParams {
    fn default() -> Self {
        let ClimateParams { t_min, t_opt, t_max } = ClimateParams::default();
        Self { t_min, t_opt, t_max }
    }
}

impl TryFrom<UncheckedClimateParams> for ClimateParams {
    type Error = AlgaeError;

    fn try_from(raw: UncheckedClimateParams) -> AlgaeResult<Self> {
        Self::new(raw.t_min, raw.t_opt, raw.t_max)
    }
}

impl Hash for ClimateParams {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_float(self.t_min, state);
        hash_float(self.t_opt, state);
        hash_float(self.t_max, state);
    }
}

/// Climate averages for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyClimate {
    pub season: Season,

    /// Mean daytime temperature
    /// unit: °C
    pub temp_day: FloatValue,

    /// Mean nighttime temperature
    /// unit: °C
    pub temp_night: FloatValue,

    /// Mean photosynthetically active radiation at the pond surface over daylight hours
    /// unit: µmol/m²/s
    pub par: FloatValue,

    /// Hours of daylight, 0-24
    /// unit: h
    pub photoperiod: FloatValue,

    /// Monthly rainfall, carried for reporting only
    /// unit: mm
    #[serde(default)]
    pub rainfall: FloatValue,

    /// Mean cloud cover fraction, carried for reporting only
    #[serde(default)]
    pub cloud_cover_fraction: FloatValue,
}

impl MonthlyClimate {
    pub fn new(
        season: Season,
        temp_day: FloatValue,
        temp_night: FloatValue,
        par: FloatValue,
        photoperiod: FloatValue,
        rainfall: FloatValue,
        cloud_cover_fraction: FloatValue,
    ) -> AlgaeResult<Self> {
        let month = Self {
            season,
            temp_day,
            temp_night,
            par,
            photoperiod,
            rainfall,
            cloud_cover_fraction,
        };
        month.validate()?;
        Ok(month)
    }

    pub fn validate(&self) -> AlgaeResult<()> {
        ensure_finite("temp_day", self.temp_day)?;
        ensure_finite("temp_night", self.temp_night)?;
        ensure_non_negative("par", self.par)?;
        ensure_finite("photoperiod", self.photoperiod)?;
        if !(0.0..=24.0).contains(&self.photoperiod) {
            return Err(AlgaeError::OutOfRange {
                name: "photoperiod",
                value: self.photoperiod,
                min: 0.0,
                max: 24.0,
            });
        }
        ensure_finite("rainfall", self.rainfall)?;
        ensure_finite("cloud_cover_fraction", self.cloud_cover_fraction)
    }
}

impl Hash for MonthlyClimate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.season.hash(state);
        hash_float(self.temp_day, state);
        hash_float(self.temp_night, state);
        hash_float(self.par, state);
        hash_float(self.photoperiod, state);
        hash_float(self.rainfall, state);
        hash_float(self.cloud_cover_fraction, state);
    }
}

/// Twelve-month climate profile of a pond location.
///
/// `months[0]` is January. Deserialisation runs [`CityClimate::validate`], so
/// a profile without exactly twelve months is rejected on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCityClimate")]
pub struct CityClimate {
    pub city: String,
    pub country: String,
    /// unit: decimal degrees
    pub latitude: FloatValue,
    /// unit: decimal degrees
    pub longitude: FloatValue,
    pub climate_params: ClimateParams,
    pub months: Vec<MonthlyClimate>,
}

impl CityClimate {
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: FloatValue,
        longitude: FloatValue,
        climate_params: ClimateParams,
        months: Vec<MonthlyClimate>,
    ) -> AlgaeResult<Self> {
        let climate = Self {
            city: city.into(),
            country: country.into(),
            latitude,
            longitude,
            climate_params,
            months,
        };
        climate.validate()?;
        Ok(climate)
    }

    pub fn validate(&self) -> AlgaeResult<()> {
        if self.months.len() != MONTHS_PER_YEAR {
            return Err(AlgaeError::MonthCount(self.months.len()));
        }
        self.climate_params.validate()?;
        self.months.iter().try_for_each(MonthlyClimate::validate)
    }

    /// Month entry for a 0-based month index (0 = January).
    ///
    /// Indices wrap modulo 12.
    pub fn month(&self, index: usize) -> &MonthlyClimate {
        &self.months[index % MONTHS_PER_YEAR]
    }

    /// Replace every month with the same user-supplied values.
    ///
    /// All months are tagged [`Season::Custom`] with zero rainfall and cloud
    /// cover. Location metadata and cardinal temperatures are kept.
    pub fn with_uniform_months(
        &self,
        temp_day: FloatValue,
        temp_night: FloatValue,
        par: FloatValue,
        photoperiod: FloatValue,
    ) -> AlgaeResult<Self> {
        let month = MonthlyClimate::new(
            Season::Custom,
            temp_day,
            temp_night,
            par,
            photoperiod,
            0.0,
            0.0,
        )?;
        Ok(Self {
            months: vec![month; MONTHS_PER_YEAR],
            ..self.clone()
        })
    }
}

/// Serialised form of [`CityClimate`] before validation.
#[derive(Deserialize)]
struct UncheckedCityClimate {
    city: String,
    country: String,
    latitude: FloatValue,
    longitude: FloatValue,
    climate_params: ClimateParams,
    months: Vec<MonthlyClimate>,
}

impl TryFrom<UncheckedCityClimate> for CityClimate {
    type Error = AlgaeError;

    fn try_from(raw: UncheckedCityClimate) -> AlgaeResult<Self> {
        Self::new(
            raw.city,
            raw.country,
            raw.latitude,
            raw.longitude,
            raw.climate_params,
            raw.months,
        )
    }
}

impl Hash for CityClimate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.city.hash(state);
        self.country.hash(state);
        hash_float(self.latitude, state);
        hash_float(self.longitude, state);
        self.climate_params.hash(state);
        self.months.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::ContentHash;

    fn month(season: Season) -> MonthlyClimate {
        MonthlyClimate::new(season, 30.0, 20.0, 150.0, 12.0, 10.0, 0.3).unwrap()
    }

    fn climate() -> CityClimate {
        CityClimate::new(
            "Testville",
            "Nowhere",
            10.0,
            20.0,
            ClimateParams::default(),
            vec![month(Season::Dry); 12],
        )
        .unwrap()
    }

    #[test]
    fn test_cardinal_ordering_enforced() {
        assert!(ClimateParams::new(8.0, 28.0, 42.0).is_ok());
        assert_eq!(
            ClimateParams::new(28.0, 28.0, 42.0),
            Err(AlgaeError::InvalidCardinalTemperatures {
                t_min: 28.0,
                t_opt: 28.0,
                t_max: 42.0
            })
        );
        assert!(ClimateParams::new(8.0, 42.0, 42.0).is_err());
        assert!(ClimateParams::new(30.0, 20.0, 10.0).is_err());
    }

    #[test]
    fn test_month_count_enforced() {
        let result = CityClimate::new(
            "Testville",
            "Nowhere",
            0.0,
            0.0,
            ClimateParams::default(),
            vec![month(Season::Hot); 11],
        );
        assert_eq!(result, Err(AlgaeError::MonthCount(11)));
    }

    #[test]
    fn test_photoperiod_range() {
        assert!(MonthlyClimate::new(Season::Dry, 30.0, 20.0, 150.0, 24.0, 0.0, 0.0).is_ok());
        assert!(MonthlyClimate::new(Season::Dry, 30.0, 20.0, 150.0, 0.0, 0.0, 0.0).is_ok());
        assert!(MonthlyClimate::new(Season::Dry, 30.0, 20.0, 150.0, 25.0, 0.0, 0.0).is_err());
        assert!(MonthlyClimate::new(Season::Dry, 30.0, 20.0, -1.0, 12.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_uniform_override_keeps_metadata() {
        let base = climate();
        let uniform = base.with_uniform_months(32.0, 24.0, 110.0, 12.5).unwrap();

        assert_eq!(uniform.city, base.city);
        assert_eq!(uniform.climate_params, base.climate_params);
        assert_eq!(uniform.months.len(), MONTHS_PER_YEAR);
        for m in &uniform.months {
            assert_eq!(m.season, Season::Custom);
            assert!((m.par - 110.0).abs() < 1e-10);
            assert!(m.rainfall.abs() < 1e-10);
        }
        assert_ne!(base.content_hash(), uniform.content_hash());
    }

    #[test]
    fn test_month_lookup_wraps() {
        let c = climate();
        assert_eq!(c.month(12), c.month(0));
    }

    #[test]
    fn test_season_serialization() {
        assert_eq!(serde_json::to_string(&Season::Monsoon).unwrap(), r#""monsoon""#);
        let parsed: Season = serde_json::from_str(r#""custom""#).unwrap();
        assert_eq!(parsed, Season::Custom);
        assert_eq!("HOT".parse::<Season>().unwrap(), Season::Hot);
        assert!("winter".parse::<Season>().is_err());
        assert_eq!(Season::Monsoon.tracked_index(), Some(2));
        assert_eq!(Season::Custom.tracked_index(), None);
    }

    #[test]
    fn test_short_profile_rejected_on_load() {
        let mut json = serde_json::to_value(climate()).unwrap();
        json["months"].as_array_mut().unwrap().truncate(3);

        let err = serde_json::from_value::<CityClimate>(json).unwrap_err();
        assert!(
            err.to_string().contains("exactly 12 months, got 3"),
            "Unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_loaded_profile_validates_months() {
        let mut json = serde_json::to_value(climate()).unwrap();
        json["months"][4]["photoperiod"] = serde_json::json!(30.0);
        assert!(serde_json::from_value::<CityClimate>(json).is_err());

        let json = serde_json::to_value(climate()).unwrap();
        let loaded: CityClimate = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.months.len(), MONTHS_PER_YEAR);
        assert_eq!(loaded.city, "Testville");
    }

    #[test]
    fn test_cardinal_ordering_enforced_on_load() {
        let result =
            serde_json::from_str::<ClimateParams>(r#"{"T_min": 30.0, "T_opt": 20.0, "T_max": 10.0}"#);
        assert!(result.is_err());

        // Partial input fills the rest from defaults before the check
        let params: ClimateParams = serde_json::from_str(r#"{"T_max": 40.0}"#).unwrap();
        assert!((params.t_max - 40.0).abs() < 1e-10);
        assert!((params.t_min - 8.0).abs() < 1e-10);
        assert!(serde_json::from_str::<ClimateParams>(r#"{"T_max": 20.0}"#).is_err());
    }

    #[test]
    fn test_cardinal_deserialization_names() {
        let params: ClimateParams =
            serde_json::from_str(r#"{"T_min": 5.0, "T_opt": 25.0, "T_max": 38.0}"#).unwrap();
        assert!((params.t_opt - 25.0).abs() < 1e-10);
    }
}
