//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use natal_core::EngineError;

/// Errors from chart assembly.
///
/// Validation failures are raised before any provider call and name the
/// offending input field; provider failures pass through untouched so
/// the caller can tell the two apart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// An input field failed range validation.
    Validation {
        field: &'static str,
        message: &'static str,
    },
    /// Error from the ephemeris provider.
    Engine(EngineError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, message } => write!(f, "invalid {field}: {message}"),
            Self::Engine(e) => write!(f, "provider error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<EngineError> for ChartError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let e = ChartError::Validation {
            field: "latitude",
            message: "must lie strictly between -90 and 90",
        };
        let s = e.to_string();
        assert!(s.contains("latitude"), "got: {s}");
    }

    #[test]
    fn engine_error_converts() {
        let e: ChartError = EngineError::EpochOutOfRange { jd: 0.0 }.into();
        assert!(matches!(e, ChartError::Engine(_)));
    }
}
