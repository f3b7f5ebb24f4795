use std::fmt::Display;

use crate::coefficients::{
    Coefficients, Degree, LinearCoefficients, QuadraticCoefficients, TOLERANCE,
};
use crate::error::ConfigError;
use crate::render::render_rational;

/// Returns true if `value` is the undefined sentinel produced by evaluation
#[inline]
#[must_use]
pub fn is_undefined(value: f64) -> bool {
    value.is_nan()
}

/// Divides `numerator` by `denominator` unless the denominator is degenerate
#[inline]
fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() < TOLERANCE {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// A rational function f(x) = N(x) / D(x) that can be evaluated and rendered
///
/// Implementations are pure: evaluation has no side effects and the same `x`
/// always yields the same result.
pub trait RationalFunction {
    /// Evaluates the function at `x`
    ///
    /// Returns `f64::NAN` (undefined) when |D(x)| is below [`TOLERANCE`];
    /// otherwise the plain floating-point quotient N(x) / D(x).
    fn evaluate(&self, x: f64) -> f64;

    /// Canonical text form, `"(N(x)) / (D(x))"` for the base variants
    fn render(&self) -> String;

    /// Evaluates at `x`, mapping the undefined sentinel to `None`
    #[inline]
    fn try_evaluate(&self, x: f64) -> Option<f64> {
        let y = self.evaluate(x);
        if is_undefined(y) { None } else { Some(y) }
    }

    /// Returns true if the function is defined at `x`
    #[inline]
    fn is_defined_at(&self, x: f64) -> bool {
        self.try_evaluate(x).is_some()
    }
}

impl<T: RationalFunction + ?Sized> RationalFunction for &T {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: RationalFunction + ?Sized> RationalFunction for Box<T> {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

/// `(a1·x + a0) / (b1·x + b0)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEvaluator {
    coefficients: LinearCoefficients,
}

impl LinearEvaluator {
    /// Creates the evaluator from `[a1, a0]` and `[b1, b0]`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDenominator`] if the denominator is
    /// identically zero.
    pub fn new(numerator: [f64; 2], denominator: [f64; 2]) -> Result<Self, ConfigError> {
        Coefficients::linear(numerator, denominator).map(Self::from_coefficients)
    }

    /// Wraps coefficients that have already been validated
    #[must_use]
    pub const fn from_coefficients(coefficients: LinearCoefficients) -> Self {
        Self { coefficients }
    }

    /// The underlying coefficients
    #[must_use]
    pub const fn coefficients(&self) -> &LinearCoefficients {
        &self.coefficients
    }

    /// Always [`Degree::Linear`]
    pub const fn degree(&self) -> Degree {
        Degree::Linear
    }
}

impl RationalFunction for LinearEvaluator {
    fn evaluate(&self, x: f64) -> f64 {
        let c = &self.coefficients;
        guarded_div(c.numerator_at(x), c.denominator_at(x))
    }

    fn render(&self) -> String {
        render_rational(self.coefficients.numerator(), self.coefficients.denominator())
    }
}

impl Display for LinearEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// `(a2·x² + a1·x + a0) / (b2·x² + b1·x + b0)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticEvaluator {
    coefficients: QuadraticCoefficients,
}

impl QuadraticEvaluator {
    /// Creates the evaluator from `[a2, a1, a0]` and `[b2, b1, b0]`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDenominator`] if the denominator is
    /// identically zero.
    pub fn new(numerator: [f64; 3], denominator: [f64; 3]) -> Result<Self, ConfigError> {
        Coefficients::quadratic(numerator, denominator).map(Self::from_coefficients)
    }

    /// Wraps coefficients that have already been validated
    #[must_use]
    pub const fn from_coefficients(coefficients: QuadraticCoefficients) -> Self {
        Self { coefficients }
    }

    /// The underlying coefficients
    #[must_use]
    pub const fn coefficients(&self) -> &QuadraticCoefficients {
        &self.coefficients
    }

    /// Always [`Degree::Quadratic`]
    pub const fn degree(&self) -> Degree {
        Degree::Quadratic
    }
}

impl RationalFunction for QuadraticEvaluator {
    fn evaluate(&self, x: f64) -> f64 {
        let c = &self.coefficients;
        guarded_div(c.numerator_at(x), c.denominator_at(x))
    }

    fn render(&self) -> String {
        render_rational(self.coefficients.numerator(), self.coefficients.denominator())
    }
}

impl Display for QuadraticEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_linear() -> LinearEvaluator {
        LinearEvaluator::new([2.0, -4.0], [1.0, 2.0]).unwrap()
    }

    fn scenario_quadratic() -> QuadraticEvaluator {
        QuadraticEvaluator::new([3.0, -1.0, 5.0], [1.0, 0.0, -9.0]).unwrap()
    }

    #[test]
    fn linear_quotient() {
        let f = scenario_linear();
        assert!((f.evaluate(3.0) - 0.4).abs() < 1e-12);
        assert!((f.evaluate(0.0) + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn linear_pole_is_undefined() {
        let f = scenario_linear();
        assert!(is_undefined(f.evaluate(-2.0)));
        assert_eq!(f.try_evaluate(-2.0), None);
        assert!(!f.is_defined_at(-2.0));
        // Still usable after an undefined result
        assert!(f.is_defined_at(3.0));
    }

    #[test]
    fn quadratic_poles_and_values() {
        let f = scenario_quadratic();
        assert!(is_undefined(f.evaluate(3.0)));
        assert!(is_undefined(f.evaluate(-3.0)));
        assert!((f.evaluate(0.0) - (5.0 / -9.0)).abs() < 1e-12);
    }

    #[test]
    fn near_pole_inside_band_is_undefined() {
        let f = scenario_linear();
        assert!(is_undefined(f.evaluate(-2.0 + 1e-10)));
        assert!(is_undefined(f.evaluate(-2.0 - 1e-10)));
        assert!(f.is_defined_at(-2.0 + 1e-6));
        assert!(f.is_defined_at(-2.0 - 1e-6));
    }

    #[test]
    fn references_and_boxes_evaluate_the_same() {
        let f = scenario_linear();
        let by_ref: &dyn RationalFunction = &f;
        let boxed: Box<dyn RationalFunction> = Box::new(f);
        assert_eq!(by_ref.try_evaluate(3.0), f.try_evaluate(3.0));
        assert_eq!(boxed.render(), f.render());
    }

    #[test]
    fn display_matches_render() {
        assert_eq!(scenario_linear().to_string(), "(2*x - 4) / (1*x + 2)");
        assert_eq!(
            scenario_quadratic().to_string(),
            "(3*x^2 - 1*x + 5) / (1*x^2 + 0*x - 9)"
        );
    }
}
