//! Species Parameters
//!
//! Growth kinetics, light attenuation and carbon stoichiometry for one
//! microalgal species.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_in_half_open_unit, ensure_positive, AlgaeResult};
use crate::hashing::hash_float;
use crate::parameters::{GrowthParams, LightParams};
use crate::FloatValue;

/// Molar mass ratio of CO2 to carbon (44/12).
pub const CO2_PER_CARBON: FloatValue = 44.0 / 12.0;

/// Complete parameter set for one species.
///
/// `co2_to_biomass_ratio` is stored rather than recomputed from
/// `carbon_content`; the simulation only ever reads the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesParams {
    /// Species name, e.g. "Chlorella vulgaris"
    pub name: String,

    pub growth: GrowthParams,

    pub light: LightParams,

    /// Fraction of dry weight that is carbon
    /// unit: g_C/g_DW
    /// default: 0.5
    pub carbon_content: FloatValue,

    /// CO2 fixed per unit biomass produced
    /// unit: g_CO2/g_DW
    /// default: 1.83
    pub co2_to_biomass_ratio: FloatValue,
}

impl Default for SpeciesParams {
    fn default() -> Self {
        Self {
            name: "Chlorella vulgaris".to_string(),
            growth: GrowthParams::default(),
            light: LightParams::default(),
            carbon_content: 0.5,
            co2_to_biomass_ratio: 1.83,
        }
    }
}

impl SpeciesParams {
    pub fn new(
        name: impl Into<String>,
        growth: GrowthParams,
        light: LightParams,
        carbon_content: FloatValue,
        co2_to_biomass_ratio: FloatValue,
    ) -> AlgaeResult<Self> {
        let params = Self {
            name: name.into(),
            growth,
            light,
            carbon_content,
            co2_to_biomass_ratio,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> AlgaeResult<()> {
        self.growth.validate()?;
        self.light.validate()?;
        ensure_in_half_open_unit("carbon_content", self.carbon_content)?;
        ensure_positive("co2_to_biomass_ratio", self.co2_to_biomass_ratio)
    }

    /// Stoichiometric CO2:biomass ratio for a given carbon content.
    ///
    /// $$r_{CO_2:bio} = \frac{44}{12} \cdot C_{content}$$
    pub fn co2_ratio_from_carbon(carbon_content: FloatValue) -> FloatValue {
        CO2_PER_CARBON * carbon_content
    }
}

impl Hash for SpeciesParams {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.growth.hash(state);
        self.light.hash(state);
        hash_float(self.carbon_content, state);
        hash_float(self.co2_to_biomass_ratio, state);
    }
}
