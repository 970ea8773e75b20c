//! Beer-Lambert Light Attenuation
//!
//! Irradiance decays exponentially with depth as it is absorbed by biomass and
//! by the water column itself.
//!
//! # What This Module Does
//!
//! 1. Irradiance at a given depth below the surface
//! 2. Closed-form depth-averaged irradiance over the whole pond
//!
//! # Depth Averaging
//!
//! Using surface irradiance alone overstates growth by 20-50%. The average is
//! taken over irradiance *before* the nonlinear photoinhibition response is
//! applied, which slightly underestimates growth compared with integrating the
//! response layer by layer, in exchange for a closed form.
//!
//! # References
//!
//! - Razzak et al. (2024) Eq. 18-19
//! - Schediwy et al. (2019) Eq. 3, 10

use algaesim_core::parameters::LightParams;
use algaesim_core::FloatValue;

/// Attenuation depth product below which the pond is treated as transparent.
pub const TRANSPARENT_KD: FloatValue = 1e-10;

/// Total extinction coefficient $K = \sigma_x X + k_{bg}$ (1/m).
#[inline]
pub fn extinction_coefficient(
    sigma_x: FloatValue,
    biomass_conc: FloatValue,
    k_bg: FloatValue,
) -> FloatValue {
    sigma_x * biomass_conc + k_bg
}

/// Irradiance at depth `z` below the surface.
///
/// $$I(z) = I_0 \exp(-(\sigma_x X + k_{bg}) z)$$
///
/// # Arguments
///
/// * `i0` - Surface irradiance (µmol/m²/s)
/// * `sigma_x` - Biomass-specific absorption (m²/g)
/// * `biomass_conc` - Biomass concentration (g/L)
/// * `z` - Depth below the surface (m)
/// * `k_bg` - Background extinction (1/m)
pub fn irradiance_at_depth(
    i0: FloatValue,
    sigma_x: FloatValue,
    biomass_conc: FloatValue,
    z: FloatValue,
    k_bg: FloatValue,
) -> FloatValue {
    if i0 <= 0.0 {
        return 0.0;
    }

    let k = extinction_coefficient(sigma_x, biomass_conc, k_bg);
    i0 * (-k * z).exp()
}

/// Mean irradiance over the water column `[0, depth]`.
///
/// $$\bar{I} = \frac{I_0}{K D} \left(1 - e^{-K D}\right)$$
///
/// Returns `i0` unchanged when $|KD|$ is below [`TRANSPARENT_KD`].
pub fn depth_averaged_irradiance(
    i0: FloatValue,
    sigma_x: FloatValue,
    biomass_conc: FloatValue,
    depth: FloatValue,
    k_bg: FloatValue,
) -> FloatValue {
    if i0 <= 0.0 {
        return 0.0;
    }

    let kd = extinction_coefficient(sigma_x, biomass_conc, k_bg) * depth;
    if kd.abs() < TRANSPARENT_KD {
        return i0;
    }

    i0 / kd * (1.0 - (-kd).exp())
}

/// [`irradiance_at_depth`] using a species' light parameters.
pub fn irradiance_at_depth_for(
    i0: FloatValue,
    biomass_conc: FloatValue,
    z: FloatValue,
    light: &LightParams,
) -> FloatValue {
    irradiance_at_depth(
        i0,
        light.sigma_x,
        biomass_conc,
        z,
        light.background_turbidity,
    )
}

/// [`depth_averaged_irradiance`] using a species' light parameters.
pub fn depth_averaged_irradiance_for(
    i0: FloatValue,
    biomass_conc: FloatValue,
    depth: FloatValue,
    light: &LightParams,
) -> FloatValue {
    depth_averaged_irradiance(
        i0,
        light.sigma_x,
        biomass_conc,
        depth,
        light.background_turbidity,
    )
}
