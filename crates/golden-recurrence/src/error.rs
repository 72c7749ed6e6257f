//! Error types for golden-recurrence.

use thiserror::Error;

/// Result type for recurrence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating a recurrence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument is outside the domain of the operation.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },

    /// The ratio's denominator term is exactly zero.
    #[error("division by zero: term {denominator_index} of seed ({f0}, {f1}) is zero")]
    DivisionByZero {
        denominator_index: u64,
        f0: f64,
        f1: f64,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Whether this is an `InvalidArgument` error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Whether this is a `DivisionByZero` error.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Error::DivisionByZero { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = Error::invalid("n", "must be non-negative, got -1");
        assert_eq!(err.to_string(), "invalid argument `n`: must be non-negative, got -1");
        assert!(err.is_invalid_argument());

        let err = Error::DivisionByZero { denominator_index: 0, f0: 0.0, f1: 5.0 };
        assert_eq!(err.to_string(), "division by zero: term 0 of seed (0, 5) is zero");
        assert!(err.is_division_by_zero());
    }
}
