//! Unified error type for fitness trend computation
//!
//! Invalid inputs are rejected at the trend builder boundary, never
//! clamped. Display formatting has no error cases of its own.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the trend record builder and its configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrendError {
    /// Day sequence is not strictly chronological
    #[error("non-monotonic date: {current} is not after {previous}")]
    NonMonotonicDate {
        previous: NaiveDate,
        current: NaiveDate,
    },

    /// A stress score was negative
    #[error("negative {field} on {date}: {value}")]
    NegativeStress {
        field: &'static str,
        date: NaiveDate,
        value: Decimal,
    },

    /// Malformed smoothing configuration
    #[error("invalid smoothing configuration: {parameter}={value}")]
    InvalidConfig {
        parameter: &'static str,
        value: String,
    },
}

/// Result type alias for trend operations
pub type Result<T> = std::result::Result<T, TrendError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_messages_name_the_offending_input() {
        let err = TrendError::NegativeStress {
            field: "power_stress_score",
            date: NaiveDate::from_ymd_opt(2024, 9, 23).unwrap(),
            value: dec!(-12.5),
        };
        let message = err.to_string();
        assert!(message.contains("power_stress_score"));
        assert!(message.contains("-12.5"));

        let err = TrendError::NonMonotonicDate {
            previous: NaiveDate::from_ymd_opt(2024, 9, 23).unwrap(),
            current: NaiveDate::from_ymd_opt(2024, 9, 23).unwrap(),
        };
        assert!(err.to_string().contains("2024-09-23"));
    }
}
