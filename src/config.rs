//! Building evaluators from a runtime description.
//!
//! [`construct`] and [`EvaluatorConfig`] are the entry points for callers that
//! only know the degree and coefficients at runtime (parsed from input, or
//! loaded from JSON with the `serde` feature). Both produce an [`Evaluator`],
//! the closed set of variants this crate provides.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coefficients::{Coefficients, Degree};
use crate::error::ConfigError;
use crate::evaluator::{LinearEvaluator, QuadraticEvaluator, RationalFunction};
use crate::scaled::Scaled;

/// Builds an evaluator of the given degree, optionally wrapped in a scale factor
///
/// # Errors
///
/// Returns [`ConfigError::LengthMismatch`] if a coefficient slice does not hold
/// `degree + 1` values, or [`ConfigError::ZeroDenominator`] if the denominator
/// is identically zero.
///
/// # Examples
///
/// ```rust
/// use ratfunc::{construct, Degree, RationalFunction};
///
/// let f = construct(Degree::Linear, &[2.0, -4.0], &[1.0, 2.0], None)?;
/// assert!((f.evaluate(3.0) - 0.4).abs() < 1e-12);
/// assert!(f.evaluate(-2.0).is_nan());
///
/// assert!(construct(Degree::Quadratic, &[1.0, 0.0, 0.0], &[0.0, 0.0, 0.0], None).is_err());
/// # Ok::<(), ratfunc::ConfigError>(())
/// ```
pub fn construct(
    degree: Degree,
    numerator: &[f64],
    denominator: &[f64],
    scale: Option<f64>,
) -> Result<Evaluator, ConfigError> {
    let base = build_base(degree, numerator, denominator)?;
    Ok(match scale {
        Some(scale) => base.scaled(scale),
        None => base,
    })
}

fn build_base(
    degree: Degree,
    numerator: &[f64],
    denominator: &[f64],
) -> Result<Evaluator, ConfigError> {
    Ok(match degree {
        Degree::Linear => Evaluator::Linear(LinearEvaluator::from_coefficients(
            Coefficients::<2>::from_slices(numerator, denominator)?,
        )),
        Degree::Quadratic => Evaluator::Quadratic(QuadraticEvaluator::from_coefficients(
            Coefficients::<3>::from_slices(numerator, denominator)?,
        )),
    })
}

/// Plain description of an evaluator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluatorConfig {
    /// Degree of both polynomials
    pub degree: Degree,
    /// Numerator coefficients, highest power first
    pub numerator: Vec<f64>,
    /// Denominator coefficients, highest power first
    pub denominator: Vec<f64>,
    /// Scale factors wrapped around the base, innermost first
    ///
    /// Each factor is its own [`Scaled`] layer, so `[2.0, 3.0]` evaluates as
    /// `3 * (2 * f(x))` rather than `6 * f(x)`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub scales: Vec<f64>,
}

impl EvaluatorConfig {
    /// Validates the description and builds the evaluator
    ///
    /// # Errors
    ///
    /// See [`construct`].
    pub fn build(&self) -> Result<Evaluator, ConfigError> {
        let base = build_base(self.degree, &self.numerator, &self.denominator)?;
        Ok(self.scales.iter().fold(base, |f, &scale| f.scaled(scale)))
    }
}

impl TryFrom<EvaluatorConfig> for Evaluator {
    type Error = ConfigError;

    fn try_from(config: EvaluatorConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

/// One of the evaluators this crate provides
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "EvaluatorConfig", into = "EvaluatorConfig")
)]
pub enum Evaluator {
    /// Linear over linear
    Linear(LinearEvaluator),
    /// Quadratic over quadratic
    Quadratic(QuadraticEvaluator),
    /// Any evaluator multiplied by a constant
    Scaled(Scaled<Box<Evaluator>>),
}

impl Evaluator {
    /// Degree of the underlying base function
    pub fn degree(&self) -> Degree {
        match self {
            Self::Linear(f) => f.degree(),
            Self::Quadratic(f) => f.degree(),
            Self::Scaled(s) => s.base().degree(),
        }
    }

    /// Wraps this evaluator in one more scale layer
    #[must_use]
    pub fn scaled(self, scale: f64) -> Self {
        Self::Scaled(Scaled::new(Box::new(self), scale))
    }

    /// Describes this evaluator as an [`EvaluatorConfig`]
    ///
    /// Every scale layer is kept, so building the result gives back an
    /// evaluator equal to this one.
    #[must_use]
    pub fn to_config(&self) -> EvaluatorConfig {
        match self {
            Self::Linear(f) => EvaluatorConfig {
                degree: Degree::Linear,
                numerator: f.coefficients().numerator().to_vec(),
                denominator: f.coefficients().denominator().to_vec(),
                scales: Vec::new(),
            },
            Self::Quadratic(f) => EvaluatorConfig {
                degree: Degree::Quadratic,
                numerator: f.coefficients().numerator().to_vec(),
                denominator: f.coefficients().denominator().to_vec(),
                scales: Vec::new(),
            },
            Self::Scaled(s) => {
                let mut config = s.base().to_config();
                config.scales.push(s.scale());
                config
            }
        }
    }
}

impl From<Evaluator> for EvaluatorConfig {
    fn from(evaluator: Evaluator) -> Self {
        evaluator.to_config()
    }
}

impl From<LinearEvaluator> for Evaluator {
    fn from(f: LinearEvaluator) -> Self {
        Self::Linear(f)
    }
}

impl From<QuadraticEvaluator> for Evaluator {
    fn from(f: QuadraticEvaluator) -> Self {
        Self::Quadratic(f)
    }
}

impl RationalFunction for Evaluator {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Linear(f) => f.evaluate(x),
            Self::Quadratic(f) => f.evaluate(x),
            Self::Scaled(f) => f.evaluate(x),
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Linear(f) => f.render(),
            Self::Quadratic(f) => f.render(),
            Self::Scaled(f) => f.render(),
        }
    }
}

impl Display for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Side;

    #[test]
    fn builds_each_variant() {
        let f = construct(Degree::Linear, &[1.0, 2.0], &[1.0, 2.0], None).unwrap();
        assert!(matches!(f, Evaluator::Linear(_)));
        let f = construct(Degree::Quadratic, &[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], None).unwrap();
        assert!(matches!(f, Evaluator::Quadratic(_)));
        let f = construct(Degree::Quadratic, &[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], Some(2.0))
            .unwrap();
        assert!(matches!(f, Evaluator::Scaled(_)));
        assert_eq!(f.degree(), Degree::Quadratic);
    }

    #[test]
    fn rejects_wrong_lengths() {
        let err = construct(Degree::Quadratic, &[1.0, 2.0], &[1.0, 2.0, 3.0], None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LengthMismatch {
                side: Side::Numerator,
                degree: Degree::Quadratic,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn scaled_undefined_propagates() {
        let f = construct(Degree::Linear, &[2.0, -4.0], &[1.0, 2.0], Some(0.0)).unwrap();
        assert!(f.evaluate(-2.0).is_nan());
        assert_eq!(f.try_evaluate(3.0), Some(0.0));
    }

    #[test]
    fn config_round_trips_through_evaluator() {
        let config = EvaluatorConfig {
            degree: Degree::Linear,
            numerator: vec![1.0, 1.0],
            denominator: vec![1.0, 0.0],
            scales: vec![10.0],
        };
        let f = config.build().unwrap();
        assert_eq!(f.to_config(), config);
        assert_eq!(f.to_string(), "10 * [(1*x + 1) / (1*x + 0)]");
    }

    #[test]
    fn nested_scales_keep_their_layers() {
        let base = Evaluator::from(LinearEvaluator::new([1.0, 0.0], [0.0, 1.0]).unwrap());
        let nested = base.scaled(1e300).scaled(1e-300);
        let config = nested.to_config();
        assert_eq!(config.scales, vec![1e300, 1e-300]);

        let rebuilt = config.build().unwrap();
        assert_eq!(rebuilt, nested);
        assert_eq!(rebuilt.render(), nested.render());
        for x in [1e10, -3.5, 0.0, 7.25] {
            let (before, after) = (nested.evaluate(x), rebuilt.evaluate(x));
            assert!(before.to_bits() == after.to_bits(), "{before} != {after} at {x}");
        }
        // The overflowing inner layer is preserved rather than folded into 1.0
        assert!(rebuilt.evaluate(1e10).is_infinite());
    }

    #[test]
    fn scales_apply_innermost_first() {
        let config = EvaluatorConfig {
            degree: Degree::Linear,
            numerator: vec![1.0, 1.0],
            denominator: vec![1.0, 0.0],
            scales: vec![2.0, 3.0],
        };
        let f = config.build().unwrap();
        assert_eq!(f.render(), "3 * [2 * [(1*x + 1) / (1*x + 0)]]");
        assert!((f.evaluate(4.0) - 7.5).abs() < 1e-12);
        assert!(f.evaluate(0.0).is_nan());
    }
}
