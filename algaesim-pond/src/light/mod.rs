//! Light domain
//!
//! - Beer-Lambert irradiance at depth
//! - Closed-form depth-averaged irradiance fed to the growth kinetics

mod attenuation;

pub use attenuation::{
    depth_averaged_irradiance, depth_averaged_irradiance_for, extinction_coefficient,
    irradiance_at_depth, irradiance_at_depth_for, TRANSPARENT_KD,
};
