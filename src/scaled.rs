use std::fmt::Display;

use crate::evaluator::{RationalFunction, is_undefined};
use crate::render::render_scaled;

/// Multiplies every defined result of a base function by a fixed factor
///
/// Undefined results of the base pass through unchanged, for any scale
/// including zero and negative factors. A zero scale maps every defined
/// result to `0.0`, an infinite one included, so `Scaled` is undefined exactly
/// where its base is. The base may be owned or borrowed:
///
/// ```rust
/// use ratfunc::{LinearEvaluator, RationalFunction, Scaled};
///
/// let base = LinearEvaluator::new([1.0, 1.0], [1.0, 0.0])?;
/// let scaled = Scaled::new(&base, 10.0);
///
/// assert!((scaled.evaluate(4.0) - 12.5).abs() < 1e-12);
/// assert!(scaled.evaluate(0.0).is_nan());
/// assert_eq!(scaled.render(), "10 * [(1*x + 1) / (1*x + 0)]");
/// # Ok::<(), ratfunc::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled<E> {
    base: E,
    scale: f64,
}

impl<E: RationalFunction> Scaled<E> {
    /// Wraps `base` with the given scale factor
    #[must_use]
    pub fn new(base: E, scale: f64) -> Self {
        Self { base, scale }
    }

    /// The wrapped function
    #[inline]
    #[must_use]
    pub fn base(&self) -> &E {
        &self.base
    }

    /// The scale factor
    #[inline]
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Unwraps the decorator, returning the base function
    #[must_use]
    pub fn into_inner(self) -> E {
        self.base
    }
}

impl<E: RationalFunction> RationalFunction for Scaled<E> {
    fn evaluate(&self, x: f64) -> f64 {
        let y = self.base.evaluate(x);
        if is_undefined(y) {
            y
        } else if self.scale == 0.0 {
            // inf * 0 would otherwise turn a defined result into NaN
            0.0
        } else {
            y * self.scale
        }
    }

    fn render(&self) -> String {
        render_scaled(self.scale, &self.base.render())
    }
}

impl<E> AsRef<E> for Scaled<E> {
    fn as_ref(&self) -> &E {
        &self.base
    }
}

impl<E: RationalFunction> Display for Scaled<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
