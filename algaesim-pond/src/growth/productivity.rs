//! Areal productivity and sanity warnings

use algaesim_core::FloatValue;

/// Areal productivity above which a result is flagged as implausible for an
/// open pond.
/// unit: g/m²/day
pub const DEFAULT_PRODUCTIVITY_WARNING_THRESHOLD: FloatValue = 10.0;

/// Litres per cubic metre.
const LITERS_PER_M3: FloatValue = 1000.0;

/// Areal productivity (g/m²/day) from a specific growth rate.
///
/// $$P = \mu X D \cdot 1000$$
///
/// with $X$ in g/L and $D$ in m, since g/L × m × 1000 L/m³ = g/m².
pub fn areal_productivity(
    mu: FloatValue,
    biomass_conc: FloatValue,
    depth: FloatValue,
) -> FloatValue {
    mu * biomass_conc * depth * LITERS_PER_M3
}

/// Advisory messages for a productivity above `threshold`.
///
/// The message does not include the productivity itself, so repeated
/// exceedances on different days produce identical strings.
pub fn check_productivity_warnings(productivity: FloatValue, threshold: FloatValue) -> Vec<String> {
    if productivity > threshold {
        vec![format!(
            "Areal productivity exceeded {} g/m²/day; typical open ponds reach 4-12 g/m²/day",
            threshold
        )]
    } else {
        Vec::new()
    }
}

/// [`check_productivity_warnings`] at [`DEFAULT_PRODUCTIVITY_WARNING_THRESHOLD`].
pub fn productivity_warnings(productivity: FloatValue) -> Vec<String> {
    check_productivity_warnings(productivity, DEFAULT_PRODUCTIVITY_WARNING_THRESHOLD)
}
