//! Simulation domain
//!
//! - Calendar mapping of simulation days to months
//! - Daily Euler engine with harvest cycling
//! - Seasonal aggregation
//! - Validated scenarios and parallel batches

pub mod calendar;
mod batch;
mod engine;
mod scenario;
mod seasonal;

pub use batch::run_batch;
pub use calendar::{day_to_month_map, month_name, DAYS_IN_MONTH};
pub use engine::run_simulation;
pub use scenario::Scenario;
pub use seasonal::SeasonalAccumulator;
