//! tests for the traced Wegstein iterations
use std::io;

use approx::assert_abs_diff_eq;
use falsi::errors::TraceError;
use falsi::fixed_point::config::FixedPointCfg;
use falsi::fixed_point::fpi::fixed_point_trace;
use falsi::fixed_point::report::FixedPointTermination;
use falsi::fixed_point::wegstein::{wegstein_secant_trace, wegstein_trace};

type TestResult = Result<(), TraceError>;

const PHI: f64 = 1.618_033_988_749_895;

fn golden_target(x: f64) -> f64 {
    x * x - x - 1.0
}

fn contraction(x: f64) -> f64 {
    1.0 + 1.0 / x
}

#[test]
fn computes_near_optimal_q() -> TestResult {
    let res = wegstein_trace(
        golden_target,
        contraction,
        2.0,
        None,
        FixedPointCfg::new(),
        &mut io::sink(),
    )?;

    assert_eq!(res.termination, FixedPointTermination::ToleranceReached);
    assert_abs_diff_eq!(res.q, 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(res.x, PHI, epsilon = 1e-5);
    Ok(())
}

#[test]
fn converges_faster_than_plain_iteration() -> TestResult {
    let plain = fixed_point_trace(
        golden_target,
        contraction,
        2.0,
        FixedPointCfg::new(),
        &mut io::sink(),
    )?;
    let damped = wegstein_trace(
        golden_target,
        contraction,
        2.0,
        None,
        FixedPointCfg::new(),
        &mut io::sink(),
    )?;

    assert!(damped.iterations < plain.iterations);
    Ok(())
}

#[test]
fn explicit_q_is_used_verbatim() -> TestResult {
    let res = wegstein_trace(
        golden_target,
        contraction,
        2.0,
        Some(0.5),
        FixedPointCfg::new(),
        &mut io::sink(),
    )?;

    assert_eq!(res.q, 0.5);
    assert_eq!(res.termination, FixedPointTermination::ToleranceReached);
    assert!(res.f_x.abs() <= FixedPointCfg::new().abs_fx());
    Ok(())
}

#[test]
fn slope_and_q_lines_precede_the_trace() -> TestResult {
    let mut out = Vec::new();
    wegstein_trace(
        golden_target,
        contraction,
        2.0,
        None,
        FixedPointCfg::new(),
        &mut out,
    )?;

    let text = String::from_utf8(out).expect("trace output is ASCII");
    let mut lines = text.lines();
    assert!(lines.next().expect("slope line").starts_with("a = "));
    assert!(lines.next().expect("q line").starts_with("q = "));
    Ok(())
}

#[test]
fn supplied_q_skips_the_slope_line() -> TestResult {
    let mut out = Vec::new();
    wegstein_trace(
        golden_target,
        contraction,
        2.0,
        Some(0.25),
        FixedPointCfg::new(),
        &mut out,
    )?;

    let text = String::from_utf8(out).expect("trace output is ASCII");
    assert!(text.starts_with("q = 0.25\n"));
    assert!(!text.contains("a = "));
    Ok(())
}

#[test]
fn secant_update_converges() -> TestResult {
    let mut out = Vec::new();
    let res = wegstein_secant_trace(
        golden_target,
        contraction,
        2.0,
        FixedPointCfg::new(),
        &mut out,
    )?;

    assert_eq!(res.termination, FixedPointTermination::ToleranceReached);
    assert!(res.f_x.abs() <= FixedPointCfg::new().abs_fx());
    assert_abs_diff_eq!(res.x, PHI, epsilon = 1e-5);

    // two seed rows plus one row per secant step
    let text = String::from_utf8(out).expect("trace output is ASCII");
    assert_eq!(text.lines().count(), res.iterations + 1);
    assert!(text.starts_with("0\t2\n1\t1.5\n"));
    Ok(())
}
