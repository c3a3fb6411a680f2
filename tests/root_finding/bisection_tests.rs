//! tests for the traced bisection loop
use std::io;

use approx::assert_abs_diff_eq;
use falsi::errors::TraceError;
use falsi::root_finding::bisection::{bisection_trace, BisectionTraceCfg};

type TestResult = Result<(), TraceError>;

const PHI: f64 = 1.618_033_988_749_895;

fn golden_target(x: f64) -> f64 {
    x * x - x - 1.0
}

#[test]
fn converges_to_golden_ratio() -> TestResult {
    let res = bisection_trace(golden_target, BisectionTraceCfg::new(), &mut io::sink())?;

    assert!(res.f_root.abs() <= BisectionTraceCfg::DEFAULT_ABS_FX);
    assert_abs_diff_eq!(res.root, PHI, epsilon = 1e-6);
    assert!(res.iterations > 0);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn halves_bracket_width_every_pass() -> TestResult {
    let res = bisection_trace(golden_target, BisectionTraceCfg::new(), &mut io::sink())?;

    for (k, row) in res.rows.iter().enumerate() {
        let expected = 2.0 / 2f64.powi(k as i32);
        assert_eq!(row.b - row.a, expected);
    }
    Ok(())
}

#[test]
fn trial_point_is_midpoint() -> TestResult {
    let res = bisection_trace(golden_target, BisectionTraceCfg::new(), &mut io::sink())?;

    for row in &res.rows {
        assert_eq!(row.c, (row.a + row.b) / 2.0);
    }
    Ok(())
}

#[test]
fn keeps_one_row_per_iteration() -> TestResult {
    let res = bisection_trace(golden_target, BisectionTraceCfg::new(), &mut io::sink())?;

    assert_eq!(res.rows.len(), res.iterations);
    Ok(())
}

#[test]
fn emits_the_tolerance_meeting_row() -> TestResult {
    let res = bisection_trace(golden_target, BisectionTraceCfg::new(), &mut io::sink())?;

    let last = res.rows.last().expect("at least one row");
    assert!(last.fc.abs() <= BisectionTraceCfg::DEFAULT_ABS_FX);
    for row in &res.rows[..res.rows.len() - 1] {
        assert!(row.fc.abs() > BisectionTraceCfg::DEFAULT_ABS_FX);
    }
    Ok(())
}

#[test]
fn finds_root_of_line() -> TestResult {
    let cfg = BisectionTraceCfg::new()
        .with_bracket(0.0, 10.0)
        .with_abs_fx(1e-10);
    let res = bisection_trace(|x| 2.0 * x - 6.0, cfg, &mut io::sink())?;

    assert_abs_diff_eq!(res.root, 3.0, epsilon = 1e-9);
    assert!(res.f_root.abs() <= 1e-10);
    Ok(())
}

#[test]
fn exact_midpoint_root_stops_after_one_pass() -> TestResult {
    let cfg = BisectionTraceCfg::new().with_bracket(-2.0, 2.0);
    let res = bisection_trace(|x| x, cfg, &mut io::sink())?;

    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 0.0);
    assert_eq!(res.f_root, 0.0);
    Ok(())
}
