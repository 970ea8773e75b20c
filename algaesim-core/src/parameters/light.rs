//! Light Attenuation Parameters

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, AlgaeResult};
use crate::hashing::hash_float;
use crate::FloatValue;

/// Beer-Lambert extinction parameters.
///
/// The total extinction coefficient at biomass concentration $X$ is
///
/// $$K = \sigma_x X + k_{bg}$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightParams {
    /// Biomass-specific light absorption coefficient
    /// unit: m²/g
    /// default: 0.2
    pub sigma_x: FloatValue,

    /// Non-biomass extinction (water, dissolved organics, suspended solids)
    /// unit: 1/m
    /// default: 0.5
    pub background_turbidity: FloatValue,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            sigma_x: 0.2,
            background_turbidity: 0.5,
        }
    }
}

impl LightParams {
    pub fn new(sigma_x: FloatValue, background_turbidity: FloatValue) -> AlgaeResult<Self> {
        let params = Self {
            sigma_x,
            background_turbidity,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> AlgaeResult<()> {
        ensure_non_negative("sigma_x", self.sigma_x)?;
        ensure_non_negative("background_turbidity", self.background_turbidity)
    }
}

impl Hash for LightParams {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_float(self.sigma_x, state);
        hash_float(self.background_turbidity, state);
    }
}
