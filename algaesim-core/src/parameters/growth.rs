//! Growth Kinetics Parameters
//!
//! Parameters for the Monod/Steele specific growth rate of a single species.
//!
//! # Reference
//!
//! Default values describe *Chlorella vulgaris* (Schediwy et al., 2019), with a
//! lab-to-field discount calibrated so that peak open-pond productivity under
//! standard conditions lands in the 4-12 g/m²/day field range.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_in_half_open_unit, ensure_positive, AlgaeResult};
use crate::hashing::hash_float;
use crate::FloatValue;

/// Parameters for the specific growth rate of a single species.
///
/// The gross specific growth rate is
///
/// $$\mu = \mu_{max} \cdot \frac{S}{K_s + S} \cdot f(I) \cdot \delta$$
///
/// where $S$ is dissolved CO2, $f(I)$ is the Steele light response and
/// $\delta$ is the field discount factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthParams {
    /// Maximum specific growth rate
    /// unit: 1/d
    /// default: 1.0
    pub mu_max: FloatValue,

    /// Half-saturation constant for dissolved CO2
    /// unit: mg/L
    /// default: 0.5
    #[serde(rename = "Ks_co2", alias = "ks_co2")]
    pub ks_co2: FloatValue,

    /// Optimal irradiance of the Steele photoinhibition curve
    /// unit: µmol/m²/s
    /// default: 80.0
    #[serde(rename = "I_opt", alias = "i_opt")]
    pub i_opt: FloatValue,

    /// Maintenance respiration rate, applied during the night
    /// unit: 1/d
    /// default: 0.004
    pub r_maintenance: FloatValue,

    /// Lab-to-field yield discount in (0, 1]
    /// unit: dimensionless
    /// default: 0.025
    pub discount_factor: FloatValue,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            mu_max: 1.0,
            ks_co2: 0.5,
            i_opt: 80.0,
            r_maintenance: 0.004,
            discount_factor: 0.025,
        }
    }
}

impl GrowthParams {
    /// Build a validated parameter set.
    pub fn new(
        mu_max: FloatValue,
        ks_co2: FloatValue,
        i_opt: FloatValue,
        r_maintenance: FloatValue,
        discount_factor: FloatValue,
    ) -> AlgaeResult<Self> {
        let params = Self {
            mu_max,
            ks_co2,
            i_opt,
            r_maintenance,
            discount_factor,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that every rate constant is positive and the discount is in (0, 1].
    pub fn validate(&self) -> AlgaeResult<()> {
        ensure_positive("mu_max", self.mu_max)?;
        ensure_positive("Ks_co2", self.ks_co2)?;
        ensure_positive("I_opt", self.i_opt)?;
        ensure_positive("r_maintenance", self.r_maintenance)?;
        ensure_in_half_open_unit("discount_factor", self.discount_factor)
    }
}

impl Hash for GrowthParams {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_float(self.mu_max, state);
        hash_float(self.ks_co2, state);
        hash_float(self.i_opt, state);
        hash_float(self.r_maintenance, state);
        hash_float(self.discount_factor, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AlgaeError;
    use crate::hashing::ContentHash;

    #[test]
    fn test_default_parameters() {
        let params = GrowthParams::default();
        assert!((params.mu_max - 1.0).abs() < 1e-10);
        assert!((params.ks_co2 - 0.5).abs() < 1e-10);
        assert!((params.i_opt - 80.0).abs() < 1e-10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_constants() {
        assert_eq!(
            GrowthParams::new(1.0, 0.0, 80.0, 0.004, 0.5),
            Err(AlgaeError::NonPositive {
                name: "Ks_co2",
                value: 0.0
            })
        );
        assert!(GrowthParams::new(1.0, 0.5, -1.0, 0.004, 0.5).is_err());
        assert!(GrowthParams::new(1.0, 0.5, 80.0, 0.004, 1.5).is_err());
        assert!(GrowthParams::new(1.0, 0.5, 80.0, 0.004, 1.0).is_ok());
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"mu_max": 1.5, "I_opt": 120.0}"#;
        let params: GrowthParams =
            serde_json::from_str(json).expect("Partial deserialization failed");

        assert!((params.mu_max - 1.5).abs() < 1e-10);
        assert!((params.i_opt - 120.0).abs() < 1e-10);
        assert!((params.ks_co2 - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_hash_tracks_every_field() {
        let base = GrowthParams::default();
        let tweaked = GrowthParams {
            r_maintenance: 0.005,
            ..base.clone()
        };
        assert_eq!(base.content_hash(), base.clone().content_hash());
        assert_ne!(base.content_hash(), tweaked.content_hash());
    }
}
