use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, InvalidDegreeValue, ParseDegreeError, Side};

/// Magnitude below which a denominator counts as zero
///
/// Used both when rejecting an identically-zero denominator at construction and
/// when deciding that an evaluation at a particular `x` is undefined.
pub const TOLERANCE: f64 = 1e-9;

/// Degree of the numerator and denominator polynomials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[must_use]
pub enum Degree {
    /// a1·x + a0 over b1·x + b0
    Linear,
    /// a2·x² + a1·x + a0 over b2·x² + b1·x + b0
    Quadratic,
}

impl Degree {
    /// Returns the polynomial order: Linear=1, Quadratic=2
    #[inline]
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Degree::Linear => 1,
            Degree::Quadratic => 2,
        }
    }

    /// Number of coefficients each polynomial of this degree carries
    #[inline]
    #[must_use]
    pub const fn coefficient_count(self) -> usize {
        match self {
            Degree::Linear => 2,
            Degree::Quadratic => 3,
        }
    }

    /// Returns the lowercase name of this degree
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Degree::Linear => "linear",
            Degree::Quadratic => "quadratic",
        }
    }
}

impl Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Degree> for u8 {
    #[inline]
    fn from(degree: Degree) -> Self {
        degree.order()
    }
}

impl From<Degree> for &'static str {
    #[inline]
    fn from(degree: Degree) -> Self {
        degree.as_str()
    }
}

impl TryFrom<u8> for Degree {
    type Error = InvalidDegreeValue;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Linear),
            2 => Ok(Self::Quadratic),
            n => Err(InvalidDegreeValue(n)),
        }
    }
}

impl FromStr for Degree {
    type Err = ParseDegreeError;

    /// Case-insensitive; accepts the names as well as "1" and "2"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("linear") || trimmed == "1" {
            Ok(Self::Linear)
        } else if trimmed.eq_ignore_ascii_case("quadratic") || trimmed == "2" {
            Ok(Self::Quadratic)
        } else {
            Err(ParseDegreeError::new(s))
        }
    }
}

/// Validated numerator and denominator coefficients, highest power first
///
/// `Coefficients<2>` describes a linear function and `Coefficients<3>` a
/// quadratic one. Values are fixed once built; there are no setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<const N: usize> {
    degree: Degree,
    numerator: [f64; N],
    denominator: [f64; N],
}

/// Coefficients of a linear-over-linear function
pub type LinearCoefficients = Coefficients<2>;

/// Coefficients of a quadratic-over-quadratic function
pub type QuadraticCoefficients = Coefficients<3>;

impl<const N: usize> Coefficients<N> {
    fn checked(
        degree: Degree,
        numerator: [f64; N],
        denominator: [f64; N],
    ) -> Result<Self, ConfigError> {
        if is_identically_zero(&denominator) {
            tracing::debug!(%degree, ?denominator, "rejecting identically-zero denominator");
            return Err(ConfigError::ZeroDenominator {
                tolerance: TOLERANCE,
            });
        }
        tracing::trace!(%degree, ?numerator, ?denominator, "coefficients accepted");
        Ok(Self {
            degree,
            numerator,
            denominator,
        })
    }

    fn from_slices_as(
        degree: Degree,
        numerator: &[f64],
        denominator: &[f64],
    ) -> Result<Self, ConfigError> {
        let numerator = to_array::<N>(Side::Numerator, degree, numerator)?;
        let denominator = to_array::<N>(Side::Denominator, degree, denominator)?;
        Self::checked(degree, numerator, denominator)
    }

    /// Degree of both polynomials
    #[inline]
    pub const fn degree(&self) -> Degree {
        self.degree
    }

    /// Numerator coefficients, highest power first
    #[inline]
    #[must_use]
    pub const fn numerator(&self) -> &[f64; N] {
        &self.numerator
    }

    /// Denominator coefficients, highest power first
    #[inline]
    #[must_use]
    pub const fn denominator(&self) -> &[f64; N] {
        &self.denominator
    }
}

impl Coefficients<2> {
    /// Builds `(a1·x + a0) / (b1·x + b0)` from `[a1, a0]` and `[b1, b0]`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDenominator`] when both `b1` and `b0` are
    /// below [`TOLERANCE`] in magnitude.
    pub fn linear(numerator: [f64; 2], denominator: [f64; 2]) -> Result<Self, ConfigError> {
        Self::checked(Degree::Linear, numerator, denominator)
    }

    /// Like [`Coefficients::linear`], but takes slices whose length is checked
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LengthMismatch`] when a slice does not hold two
    /// values, or [`ConfigError::ZeroDenominator`] as for [`Coefficients::linear`].
    pub fn from_slices(numerator: &[f64], denominator: &[f64]) -> Result<Self, ConfigError> {
        Self::from_slices_as(Degree::Linear, numerator, denominator)
    }

    /// N(x) = a1·x + a0
    #[inline]
    #[must_use]
    pub fn numerator_at(&self, x: f64) -> f64 {
        linear_at(&self.numerator, x)
    }

    /// D(x) = b1·x + b0
    #[inline]
    #[must_use]
    pub fn denominator_at(&self, x: f64) -> f64 {
        linear_at(&self.denominator, x)
    }
}

impl Coefficients<3> {
    /// Builds `(a2·x² + a1·x + a0) / (b2·x² + b1·x + b0)`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDenominator`] when every `b` coefficient is
    /// below [`TOLERANCE`] in magnitude.
    pub fn quadratic(numerator: [f64; 3], denominator: [f64; 3]) -> Result<Self, ConfigError> {
        Self::checked(Degree::Quadratic, numerator, denominator)
    }

    /// Like [`Coefficients::quadratic`], but takes slices whose length is checked
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LengthMismatch`] when a slice does not hold three
    /// values, or [`ConfigError::ZeroDenominator`] as for [`Coefficients::quadratic`].
    pub fn from_slices(numerator: &[f64], denominator: &[f64]) -> Result<Self, ConfigError> {
        Self::from_slices_as(Degree::Quadratic, numerator, denominator)
    }

    /// N(x) = a2·x² + a1·x + a0
    #[inline]
    #[must_use]
    pub fn numerator_at(&self, x: f64) -> f64 {
        quadratic_at(&self.numerator, x)
    }

    /// D(x) = b2·x² + b1·x + b0
    #[inline]
    #[must_use]
    pub fn denominator_at(&self, x: f64) -> f64 {
        quadratic_at(&self.denominator, x)
    }
}

#[inline]
fn linear_at(c: &[f64; 2], x: f64) -> f64 {
    c[0] * x + c[1]
}

#[inline]
fn quadratic_at(c: &[f64; 3], x: f64) -> f64 {
    c[0] * x * x + c[1] * x + c[2]
}

fn is_identically_zero(coefficients: &[f64]) -> bool {
    coefficients.iter().all(|c| c.abs() < TOLERANCE)
}

fn to_array<const N: usize>(
    side: Side,
    degree: Degree,
    values: &[f64],
) -> Result<[f64; N], ConfigError> {
    values.try_into().map_err(|_| {
        tracing::debug!(%side, %degree, found = values.len(), "coefficient count mismatch");
        ConfigError::LengthMismatch {
            side,
            degree,
            expected: N,
            found: values.len(),
        }
    })
}
