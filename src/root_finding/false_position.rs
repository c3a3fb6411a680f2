//! Traced false position (regula falsi) over a sign-changing bracket.

use std::io::Write;

use tracing::debug;

use super::bisection::RESIDUAL_SENTINEL;
use super::report::{write_table_head, TraceReport, TraceRow};
use super::signs::same_class;
use crate::errors::TraceError;

const ALGORITHM: &str = "false_position";
const TITLE: &str = "False Position Method";

/// False-position trace configuration; same fields and defaults as
/// [`BisectionTraceCfg`](super::bisection::BisectionTraceCfg).
#[derive(Debug, Copy, Clone)]
pub struct FalsePositionTraceCfg {
    start_a: f64,
    start_b: f64,
    abs_fx: f64,
}

impl FalsePositionTraceCfg {
    pub const DEFAULT_START_A: f64 = 0.0;
    pub const DEFAULT_START_B: f64 = 2.0;
    pub const DEFAULT_ABS_FX: f64 = 1e-7;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bracket(mut self, a: f64, b: f64) -> Self {
        self.start_a = a;
        self.start_b = b;
        self
    }

    pub fn with_abs_fx(mut self, v: f64) -> Self {
        self.abs_fx = v;
        self
    }

    #[inline]
    #[must_use]
    pub fn start_a(&self) -> f64 {
        self.start_a
    }

    #[inline]
    #[must_use]
    pub fn start_b(&self) -> f64 {
        self.start_b
    }

    #[inline]
    #[must_use]
    pub fn abs_fx(&self) -> f64 {
        self.abs_fx
    }
}

impl Default for FalsePositionTraceCfg {
    fn default() -> Self {
        Self {
            start_a: Self::DEFAULT_START_A,
            start_b: Self::DEFAULT_START_B,
            abs_fx: Self::DEFAULT_ABS_FX,
        }
    }
}

/// Runs the traced false-position loop, streaming one table row per pass
/// to `out` and the `<N> iterations` footer after convergence.
///
/// Each pass evaluates the endpoint residuals first, then takes the trial
/// point where the secant through (a, f(a)) and (b, f(b)) crosses zero.
/// Endpoint replacement and termination match the bisection trace: `a` is
/// replaced when f(c) and f(a) share a sign class, and the loop exits once
/// |f(c)| drops to `cfg.abs_fx`. When f(a) == f(b) the secant step divides
/// by zero; the resulting ±inf/NaN trial point flows through the trace
/// unguarded, and a NaN residual ends the loop because its comparison
/// against the tolerance is false. There is no iteration cap.
///
/// # Errors
///
/// [`TraceError::Sink`] when `out` rejects a write.
pub fn false_position_trace<F, W>(
    mut func: F,
    cfg: FalsePositionTraceCfg,
    out: &mut W,
) -> Result<TraceReport, TraceError>
where
    F: FnMut(f64) -> f64,
    W: Write,
{
    let abs_fx = cfg.abs_fx();
    let mut a = cfg.start_a();
    let mut b = cfg.start_b();

    let mut c = 0.0;
    let mut fc = RESIDUAL_SENTINEL;
    let mut iterations = 0;
    let mut rows = Vec::new();

    write_table_head(out, TITLE)?;
    while fc.abs() > abs_fx {
        let fa = func(a);
        let fb = func(b);
        // x-intercept of the secant through (a, fa) and (b, fb)
        c = b - fb * (b - a) / (fb - fa);
        fc = func(c);

        let row = TraceRow { a, b, c, fa, fb, fc };
        writeln!(out, "{row}")?;
        rows.push(row);

        if same_class(fc, fa) {
            a = c;
        } else {
            b = c;
        }
        iterations += 1;
    }
    writeln!(out, "{iterations} iterations")?;

    debug!(root = c, residual = fc, iterations, "false-position trace converged");
    Ok(TraceReport {
        root: c,
        f_root: fc,
        iterations,
        rows,
        algorithm_name: ALGORITHM,
    })
}
