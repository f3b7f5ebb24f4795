//! Basic usage example for the ratfunc crate.
//!
//! Run with: `cargo run --example basic_usage`
//! Set `RUST_LOG=ratfunc=trace` to see construction events.

use ratfunc::{
    Degree, LinearEvaluator, QuadraticEvaluator, RationalFunction, Scaled, construct,
};
use tracing_subscriber::EnvFilter;

/// Prints f(x) with four decimals, or a note when f is undefined at x
fn report(name: &str, f: &impl RationalFunction, x: f64) {
    match f.try_evaluate(x) {
        Some(y) => println!("  {name}({x}) = {y:.4}"),
        None => println!("  {name}({x}) is undefined (denominator vanishes)"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ratfunc=debug")),
        )
        .init();

    println!("=== Ratfunc Demo ===\n");

    // Linear over linear
    let linear = LinearEvaluator::new([2.0, -4.0], [1.0, 2.0]).unwrap();
    println!("Linear: f(x) = {linear}");
    for x in [3.0, 0.0, -2.0] {
        report("f", &linear, x);
    }
    println!();

    // Quadratic over quadratic
    let quadratic = QuadraticEvaluator::new([3.0, -1.0, 5.0], [1.0, 0.0, -9.0]).unwrap();
    println!("Quadratic: g(x) = {quadratic}");
    for x in [0.0, 3.0, -3.0, 1.5] {
        report("g", &quadratic, x);
    }
    println!();

    // Scaling decorator over a borrowed base
    let base = LinearEvaluator::new([1.0, 1.0], [1.0, 0.0]).unwrap();
    let scaled = Scaled::new(&base, 10.0);
    println!("Scaled: h(x) = {scaled}");
    for x in [4.0, 0.0] {
        report("h", &scaled, x);
    }
    println!();

    // Runtime construction, including a rejected configuration
    println!("=== Runtime Construction ===\n");
    let degree: Degree = "quadratic".parse().unwrap();
    match construct(degree, &[1.0, 0.0, 0.0], &[0.0, 0.0, 0.0], None) {
        Ok(f) => println!("  unexpectedly built {f}"),
        Err(err) => println!("  rejected: {err}"),
    }
    let built = construct(degree, &[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], Some(0.5)).unwrap();
    println!("  built {built} ({} base)", built.degree());
    report("k", &built, 1.0);
    report("k", &built, -2.0);
}
