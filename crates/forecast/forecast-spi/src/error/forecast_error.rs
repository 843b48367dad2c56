//! Forecast error types

use thiserror::Error;

/// Errors that can occur while validating, fitting or projecting a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// A raw aggregate value could not be read as a number
    #[error("Invalid value at position {index}: '{raw}' is not numeric")]
    InvalidValue { index: usize, raw: String },

    /// A value parsed but is NaN or infinite
    #[error("Non-finite value at position {index}: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Sequence indices (or calendar periods) are not strictly increasing
    #[error("Sequence is not strictly increasing at position {index}")]
    NonMonotonicIndex { index: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_value_error_message() {
        let error = ForecastError::InvalidValue {
            index: 3,
            raw: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value at position 3: 'abc' is not numeric"
        );
    }

    #[test]
    fn test_non_finite_value_error_message() {
        let error = ForecastError::NonFiniteValue {
            index: 0,
            value: f64::INFINITY,
        };
        assert_eq!(error.to_string(), "Non-finite value at position 0: inf");
    }

    #[test]
    fn test_non_monotonic_error_message() {
        let error = ForecastError::NonMonotonicIndex { index: 7 };
        assert_eq!(
            error.to_string(),
            "Sequence is not strictly increasing at position 7"
        );
    }

    #[test]
    fn test_invalid_parameter_error_message() {
        let error = ForecastError::InvalidParameter {
            name: "label_mode".to_string(),
            reason: "unknown mode 'lunar'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'label_mode': unknown mode 'lunar'"
        );
    }

    #[test]
    fn test_numerical_error_message() {
        let error = ForecastError::NumericalError("singular design".to_string());
        assert_eq!(error.to_string(), "Numerical error: singular design");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(ForecastError::NonMonotonicIndex { index: 1 });
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }
}
