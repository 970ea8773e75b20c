//! Cardinal Temperature Model with Inflection (CTMI)
//!
//! Empirical growth response to temperature with three cardinal points:
//!
//! $$f(T) = \frac{(T - T_{max})(T - T_{min})^2}{(T_{opt} - T_{min})\left[(T_{opt} - T_{min})(T - T_{opt}) - (T_{opt} - T_{max})(T_{opt} + T_{min} - 2T)\right]}$$
//!
//! for $T_{min} < T < T_{max}$, and zero outside that range.
//!
//! # Reference
//!
//! Rosso, Lobry & Flandrois (1993), J. Theor. Biol. 162, 447-463

use algaesim_core::parameters::ClimateParams;
use algaesim_core::FloatValue;

/// CTMI response in `[0, 1]`, peaking at `t_opt`.
///
/// Callers must supply `t_min < t_opt < t_max`; [`ClimateParams`] enforces
/// this at construction.
pub fn temperature_response(
    t: FloatValue,
    t_min: FloatValue,
    t_opt: FloatValue,
    t_max: FloatValue,
) -> FloatValue {
    if t <= t_min || t >= t_max {
        return 0.0;
    }

    let numerator = (t - t_max) * (t - t_min).powi(2);
    let denominator = (t_opt - t_min)
        * ((t_opt - t_min) * (t - t_opt) - (t_opt - t_max) * (t_opt + t_min - 2.0 * t));

    (numerator / denominator).clamp(0.0, 1.0)
}

/// [`temperature_response`] using a location's cardinal temperatures.
pub fn temperature_modifier(t: FloatValue, params: &ClimateParams) -> FloatValue {
    temperature_response(t, params.t_min, params.t_opt, params.t_max)
}
