//! Property-based tests for evaluation and scaling.

use proptest::prelude::*;

use ratfunc::{
    LinearEvaluator, QuadraticEvaluator, RationalFunction, Scaled, TOLERANCE, is_undefined,
};

// Strategy for moderate finite coefficients
fn coeff() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

// Denominator coefficients that are not all below the tolerance
fn linear_denominator() -> impl Strategy<Value = [f64; 2]> {
    [coeff(), coeff()].prop_filter("denominator must not be identically zero", |d| {
        d.iter().any(|c| c.abs() >= TOLERANCE)
    })
}

fn quadratic_denominator() -> impl Strategy<Value = [f64; 3]> {
    [coeff(), coeff(), coeff()].prop_filter("denominator must not be identically zero", |d| {
        d.iter().any(|c| c.abs() >= TOLERANCE)
    })
}

fn same(a: f64, b: f64) -> bool {
    (is_undefined(a) && is_undefined(b)) || a == b
}

proptest! {
    #[test]
    fn linear_matches_direct_arithmetic(
        n in [coeff(), coeff()],
        d in linear_denominator(),
        x in -1000.0f64..1000.0,
    ) {
        let f = LinearEvaluator::new(n, d).unwrap();
        let den = d[0] * x + d[1];
        let expected = if den.abs() < TOLERANCE { f64::NAN } else { (n[0] * x + n[1]) / den };
        prop_assert!(same(f.evaluate(x), expected));
    }

    #[test]
    fn quadratic_matches_direct_arithmetic(
        n in [coeff(), coeff(), coeff()],
        d in quadratic_denominator(),
        x in -1000.0f64..1000.0,
    ) {
        let f = QuadraticEvaluator::new(n, d).unwrap();
        let den = d[0] * x * x + d[1] * x + d[2];
        let expected = if den.abs() < TOLERANCE {
            f64::NAN
        } else {
            (n[0] * x * x + n[1] * x + n[2]) / den
        };
        prop_assert!(same(f.evaluate(x), expected));
    }

    #[test]
    fn undefined_inside_tolerance_band(
        n in [coeff(), coeff()],
        root in -100.0f64..100.0,
        offset in -1e-10f64..1e-10,
    ) {
        // D(x) = x - root, so |D(root + offset)| stays well under the tolerance
        let f = LinearEvaluator::new(n, [1.0, -root]).unwrap();
        prop_assert!(is_undefined(f.evaluate(root + offset)));
        prop_assert_eq!(f.try_evaluate(root + offset), None);
    }

    #[test]
    fn scaling_law(
        n in [coeff(), coeff(), coeff()],
        d in quadratic_denominator(),
        x in -100.0f64..100.0,
        scale in prop_oneof![Just(0.0), Just(-1.0), -50.0f64..50.0],
    ) {
        let base = QuadraticEvaluator::new(n, d).unwrap();
        let scaled = Scaled::new(&base, scale);
        let y = base.evaluate(x);
        if is_undefined(y) {
            prop_assert!(is_undefined(scaled.evaluate(x)));
        } else {
            prop_assert!(same(scaled.evaluate(x), y * scale));
        }
    }

    #[test]
    fn try_evaluate_agrees_with_evaluate(
        n in [coeff(), coeff()],
        d in linear_denominator(),
        x in -1000.0f64..1000.0,
    ) {
        let f = LinearEvaluator::new(n, d).unwrap();
        match f.try_evaluate(x) {
            Some(y) => prop_assert!(same(f.evaluate(x), y)),
            None => prop_assert!(is_undefined(f.evaluate(x))),
        }
    }
}
