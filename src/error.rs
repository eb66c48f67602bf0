//! Error type for all fallible calendar operations.

use crate::date::IranianDate;
use crate::fields::{DateField, DateUnit};

/// Error type for all fallible operations in the crate.
///
/// Every validation failure is reported synchronously at the offending call;
/// nothing is retried or partially constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A constructor or setter argument is outside its structurally valid range.
    #[error("invalid value {value} for {field}")]
    InvalidField {
        /// The field whose range was violated.
        field: DateField,
        /// The offending value.
        value: i64,
    },

    /// A field was read through the generic path when it must go through
    /// its dedicated accessor.
    #[error("unsupported field: {field} (use its dedicated accessor)")]
    UnsupportedField {
        /// The rejected field.
        field: DateField,
    },

    /// A unit was named that the calendar does not do arithmetic in.
    #[error("unsupported unit: {unit}")]
    UnsupportedUnit {
        /// The rejected unit.
        unit: DateUnit,
    },

    /// Eras were named; the calendar has a single, unnamed era.
    #[error("eras are not supported")]
    EraNotSupported,

    /// A sequence step is zero, or its month and day components disagree in sign.
    #[error("invalid step: {months} months, {days} days")]
    InvalidStep {
        /// Total months of the step.
        months: i64,
        /// Days of the step.
        days: i64,
    },

    /// A sequence step points away from its end date.
    #[error("step direction contradicts the range {start} to {end}")]
    DirectionMismatch {
        /// The start of the sequence.
        start: IranianDate,
        /// The exclusive end of the sequence.
        end: IranianDate,
    },

    /// A textual date does not match the `yyyy-MM-dd` form.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DateError::InvalidField {
            field: DateField::MonthOfYear,
            value: 13,
        };
        assert_eq!(err.to_string(), "invalid value 13 for month-of-year");

        let err = DateError::UnsupportedField {
            field: DateField::EpochDay,
        };
        assert_eq!(
            err.to_string(),
            "unsupported field: epoch-day (use its dedicated accessor)"
        );

        let err = DateError::UnsupportedUnit {
            unit: DateUnit::Eras,
        };
        assert_eq!(err.to_string(), "unsupported unit: eras");

        assert_eq!(
            DateError::EraNotSupported.to_string(),
            "eras are not supported"
        );

        let err = DateError::InvalidStep { months: 1, days: -1 };
        assert_eq!(err.to_string(), "invalid step: 1 months, -1 days");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DateError>();
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DateError>();
    }
}
