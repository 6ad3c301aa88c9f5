//! Error type shared by the ephemeris provider and the chart builder.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundli_vedic_base::VedicError;

/// Errors from position computation and chart assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ComputationError {
    /// Backing data could not be read, parsed, or is missing a body.
    EphemerisUnavailable(String),
    /// Instant lies outside the validity span of the loaded data.
    DateOutOfRange { jd_utc: f64 },
    InvalidInput(&'static str),
    /// A required body was absent from the provider's answer.
    IncompleteChart(&'static str),
}

impl Display for ComputationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EphemerisUnavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::DateOutOfRange { jd_utc } => write!(f, "date out of range: JD {jd_utc}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::IncompleteChart(msg) => write!(f, "incomplete chart: {msg}"),
        }
    }
}

impl Error for ComputationError {}

impl From<VedicError> for ComputationError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::InvalidLocation(msg) | VedicError::InvalidInput(msg) => {
                Self::InvalidInput(msg)
            }
            _ => Self::InvalidInput("unsupported vedic input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ComputationError::EphemerisUnavailable("no file".into()).to_string(),
            "ephemeris unavailable: no file"
        );
        assert_eq!(
            ComputationError::DateOutOfRange { jd_utc: 1.5 }.to_string(),
            "date out of range: JD 1.5"
        );
        assert_eq!(
            ComputationError::IncompleteChart("moon missing").to_string(),
            "incomplete chart: moon missing"
        );
    }

    #[test]
    fn vedic_error_becomes_invalid_input() {
        let e: ComputationError = VedicError::InvalidLocation("latitude out of range").into();
        assert_eq!(e, ComputationError::InvalidInput("latitude out of range"));
    }
}
