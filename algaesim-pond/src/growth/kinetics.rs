//! Specific Growth Rate Kinetics
//!
//! Gross specific growth rate of a culture limited by dissolved CO2 and light.
//!
//! # What This Module Does
//!
//! 1. Monod saturation response to dissolved CO2
//! 2. Steele photoinhibition response to irradiance
//! 3. Combines both with the species' maximum rate and field discount:
//!    $$\mu = \mu_{max} \cdot \frac{S}{K_s + S} \cdot \frac{I}{I_{opt}} e^{1 - I/I_{opt}} \cdot \delta$$
//! 4. Evaluates the rate at the depth-averaged irradiance of the pond
//!
//! Temperature is not applied here; see [`crate::climate`].
//!
//! # References
//!
//! - Monod (1949)
//! - Steele (1962)
//! - Schediwy et al. (2019)

use algaesim_core::parameters::{GrowthParams, LightParams};
use algaesim_core::FloatValue;

use crate::light::depth_averaged_irradiance_for;

/// Monod saturation response to dissolved CO2, in `[0, 1)`.
///
/// $$f(S) = \frac{S}{K_s + S}$$
///
/// Returns 0 when `co2 <= 0`.
pub fn monod_co2_response(co2: FloatValue, ks_co2: FloatValue) -> FloatValue {
    if co2 <= 0.0 {
        return 0.0;
    }
    co2 / (ks_co2 + co2)
}

/// Steele light response, peaking at 1.0 when `irradiance == i_opt`.
///
/// $$f(I) = \frac{I}{I_{opt}} \exp\left(1 - \frac{I}{I_{opt}}\right)$$
///
/// Falls toward zero in the dark and under strong light (photoinhibition).
/// `i_opt` must be positive.
pub fn steele_light_response(irradiance: FloatValue, i_opt: FloatValue) -> FloatValue {
    if irradiance <= 0.0 {
        return 0.0;
    }
    let ratio = irradiance / i_opt;
    ratio * (1.0 - ratio).exp()
}

/// Gross specific growth rate (1/d) at a single irradiance.
///
/// Always non-negative.
pub fn specific_growth_rate(
    co2: FloatValue,
    irradiance: FloatValue,
    params: &GrowthParams,
) -> FloatValue {
    params.mu_max
        * monod_co2_response(co2, params.ks_co2)
        * steele_light_response(irradiance, params.i_opt)
        * params.discount_factor
}

/// Specific growth rate (1/d) at the depth-averaged irradiance of the pond.
///
/// The Steele response is applied to the mean irradiance rather than averaged
/// over depth layers. This underestimates growth slightly in dense cultures.
///
/// # Arguments
///
/// * `i0` - Surface PAR (µmol/m²/s)
/// * `co2` - Dissolved CO2 (mg/L)
/// * `biomass_conc` - Biomass concentration (g/L), drives self-shading
/// * `depth` - Pond depth (m)
pub fn depth_averaged_growth_rate(
    i0: FloatValue,
    co2: FloatValue,
    biomass_conc: FloatValue,
    depth: FloatValue,
    growth: &GrowthParams,
    light: &LightParams,
) -> FloatValue {
    let i_avg = depth_averaged_irradiance_for(i0, biomass_conc, depth, light);
    specific_growth_rate(co2, i_avg, growth)
}
