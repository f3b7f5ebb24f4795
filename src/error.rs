use thiserror::Error;

use crate::coefficients::Degree;

/// Which polynomial of a rational function a coefficient list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The numerator N(x)
    Numerator,
    /// The denominator D(x)
    Denominator,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numerator => write!(f, "numerator"),
            Self::Denominator => write!(f, "denominator"),
        }
    }
}

/// Error returned when a rational function cannot be built from its coefficients
///
/// This is a construction-time failure. A denominator that only vanishes at a
/// particular `x` is not an error; evaluation reports it as undefined instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Every denominator coefficient is below the tolerance, so D(x) = 0 for all x
    #[error("denominator is identically zero (all coefficients below {tolerance:e})")]
    ZeroDenominator {
        /// Tolerance the coefficients were compared against
        tolerance: f64,
    },

    /// A coefficient list does not have `degree + 1` entries
    #[error("{side} of a {degree} function needs {expected} coefficients, got {found}")]
    LengthMismatch {
        /// Polynomial the list was supplied for
        side: Side,
        /// Declared degree
        degree: Degree,
        /// Required number of coefficients
        expected: usize,
        /// Number of coefficients supplied
        found: usize,
    },
}

/// Error returned when converting an invalid value to [`Degree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid degree value: {0} (expected 1 or 2)")]
pub struct InvalidDegreeValue(pub u8);

/// Error returned when parsing a string into [`Degree`] fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid degree: {input:?} (expected \"linear\", \"quadratic\", \"1\" or \"2\")")]
pub struct ParseDegreeError {
    input: String,
}

impl ParseDegreeError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the string that failed to parse
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
