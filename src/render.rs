//! Canonical text form of a rational function.
//!
//! The output is independent of locale and of which evaluator produced it:
//! `(2*x - 4) / (1*x + 2)` for numerator `[2, -4]` over denominator `[1, 2]`.

use std::fmt::Write;

/// Renders a polynomial given highest power first
///
/// The leading coefficient keeps its own sign; every later one is written as
/// `+ |c|` or `- |c|`. Power one renders as `c*x`, higher powers as `c*x^n`.
#[must_use]
pub fn render_polynomial(coefficients: &[f64]) -> String {
    let mut out = String::new();
    let top = coefficients.len().saturating_sub(1);
    for (i, &c) in coefficients.iter().enumerate() {
        let c = positive_zero(c);
        let power = top - i;
        if i == 0 {
            let _ = write!(out, "{c}");
        } else {
            let sign = if c < 0.0 { '-' } else { '+' };
            let _ = write!(out, " {sign} {}", c.abs());
        }
        match power {
            0 => {}
            1 => out.push_str("*x"),
            n => {
                let _ = write!(out, "*x^{n}");
            }
        }
    }
    out
}

/// Renders `(N(x)) / (D(x))`
#[must_use]
pub fn render_rational(numerator: &[f64], denominator: &[f64]) -> String {
    format!(
        "({}) / ({})",
        render_polynomial(numerator),
        render_polynomial(denominator)
    )
}

/// Renders the scaled form `{scale} * [{base}]`
#[must_use]
pub fn render_scaled(scale: f64, base: &str) -> String {
    format!("{} * [{base}]", positive_zero(scale))
}

// -0.0 would otherwise print as "-0"
#[inline]
fn positive_zero(c: f64) -> f64 {
    if c == 0.0 { 0.0 } else { c }
}
