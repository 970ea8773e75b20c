//! Open-pond microalgae growth model
//!
//! Pure functions for light attenuation, growth kinetics and temperature
//! response, composed into a daily simulation engine.
//!
//! # Modules
//!
//! - [`light`]: Beer-Lambert attenuation and depth averaging
//! - [`growth`]: Monod/Steele specific growth rate and areal productivity
//! - [`climate`]: CTMI temperature response and day/night integration
//! - [`simulation`]: Daily Euler loop, harvesting, seasonal breakdown, batches
//! - [`presets`]: Reference species and climate data

pub mod climate;
pub mod growth;
pub mod light;
pub mod presets;
pub mod simulation;

pub use simulation::{run_batch, run_simulation, Scenario};
