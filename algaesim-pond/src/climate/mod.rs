//! Climate domain
//!
//! - CTMI temperature response
//! - Day/night integration of growth and maintenance respiration

mod day_night;
mod temperature;

pub use day_night::{daily_growth_breakdown, daily_growth_rate, DailyGrowthBreakdown, DayConditions};
pub use temperature::{temperature_modifier, temperature_response};
