use thiserror::Error;

use crate::FloatValue;

/// Error type for invalid simulation inputs.
///
/// Every variant is raised at the data-model boundary while constructing or
/// validating parameters. The numerical kernels never return errors.
#[derive(Error, Debug)]
pub enum AlgaeError {
    #[error("Cardinal temperatures must satisfy T_min < T_opt < T_max, got T_min={t_min}, T_opt={t_opt}, T_max={t_max}")]
    InvalidCardinalTemperatures {
        t_min: FloatValue,
        t_opt: FloatValue,
        t_max: FloatValue,
    },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: FloatValue },
    #[error("{name} cannot be negative, got {value}")]
    Negative { name: &'static str, value: FloatValue },
    #[error("{name} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: FloatValue,
        min: FloatValue,
        max: FloatValue,
    },
    #[error("Harvest threshold ({threshold} g/L) must exceed initial biomass ({initial} g/L)")]
    HarvestThreshold {
        threshold: FloatValue,
        initial: FloatValue,
    },
    #[error("Climate profile must contain exactly 12 months, got {0}")]
    MonthCount(usize),
    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PartialEq for AlgaeError {
    fn eq(&self, other: &Self) -> bool {
        // io::Error is not comparable, so compare on the rendered message
        self.to_string() == other.to_string()
    }
}

/// Convenience type for `Result<T, AlgaeError>`.
pub type AlgaeResult<T> = Result<T, AlgaeError>;

/// Reject NaN and infinities.
pub fn ensure_finite(name: &'static str, value: FloatValue) -> AlgaeResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AlgaeError::NonFinite { name })
    }
}

/// Require `value > 0`.
pub fn ensure_positive(name: &'static str, value: FloatValue) -> AlgaeResult<()> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(AlgaeError::NonPositive { name, value })
    }
}

/// Require `value >= 0`.
pub fn ensure_non_negative(name: &'static str, value: FloatValue) -> AlgaeResult<()> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(AlgaeError::Negative { name, value })
    }
}

/// Require `0 < value <= 1`.
pub fn ensure_in_half_open_unit(name: &'static str, value: FloatValue) -> AlgaeResult<()> {
    ensure_finite(name, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(AlgaeError::OutOfRange {
            name,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}
