//! Growth domain
//!
//! - Monod CO2 limitation and Steele photoinhibition
//! - Depth-averaged specific growth rate
//! - Areal productivity and its sanity warnings

mod kinetics;
mod productivity;

pub use kinetics::{
    depth_averaged_growth_rate, monod_co2_response, specific_growth_rate, steele_light_response,
};
pub use productivity::{
    areal_productivity, check_productivity_warnings, productivity_warnings,
    DEFAULT_PRODUCTIVITY_WARNING_THRESHOLD,
};
