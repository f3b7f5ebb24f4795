//! #  Ratfunc - evaluation of low-degree rational functions.
//!
//! ## Overview
//!
//! A rational function is a quotient f(x) = N(x) / D(x) of two polynomials.
//! This library evaluates the linear-over-linear and quadratic-over-quadratic
//! cases, and can scale any of them by a constant factor:
//!
//! - [`LinearEvaluator`]: `(a1·x + a0) / (b1·x + b0)`
//! - [`QuadraticEvaluator`]: `(a2·x² + a1·x + a0) / (b2·x² + b1·x + b0)`
//! - [`Scaled`]: wraps any [`RationalFunction`] and multiplies its results
//!
//! ## Degenerate denominators
//!
//! A denominator whose coefficients are all below [`TOLERANCE`] is the zero
//! polynomial; building such a function fails with [`ConfigError`]. A
//! denominator that merely vanishes at some `x` is fine to build, and
//! evaluating there returns `f64::NAN` as an undefined sentinel instead of
//! failing, so the same evaluator keeps working for other points.
//!
//! ## Quick Start
//!
//! ```rust
//! use ratfunc::{LinearEvaluator, RationalFunction, Scaled};
//!
//! let f = LinearEvaluator::new([2.0, -4.0], [1.0, 2.0])?;
//! assert_eq!(f.render(), "(2*x - 4) / (1*x + 2)");
//! assert!((f.evaluate(3.0) - 0.4).abs() < 1e-12);
//!
//! // x = -2 is a pole
//! assert_eq!(f.try_evaluate(-2.0), None);
//!
//! let g = Scaled::new(&f, 10.0);
//! assert!((g.evaluate(3.0) - 4.0).abs() < 1e-12);
//! # Ok::<(), ratfunc::ConfigError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for [`Degree`], [`EvaluatorConfig`]
//!   and [`Evaluator`]. Deserializing an [`Evaluator`] re-validates its coefficients.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Coefficient storage, degree tags and the degeneracy tolerance.
pub mod coefficients;
pub mod config;
/// Construction and conversion errors.
pub mod error;
/// The [`RationalFunction`] trait and the linear and quadratic evaluators.
pub mod evaluator;
pub mod render;
/// The scaling decorator.
pub mod scaled;

pub use coefficients::{
    Coefficients, Degree, LinearCoefficients, QuadraticCoefficients, TOLERANCE,
};
pub use config::{Evaluator, EvaluatorConfig, construct};
pub use error::{ConfigError, InvalidDegreeValue, ParseDegreeError, Side};
pub use evaluator::{LinearEvaluator, QuadraticEvaluator, RationalFunction, is_undefined};
pub use scaled::Scaled;
