//! Traced midpoint bisection over a sign-changing bracket.

use std::io::Write;

use tracing::debug;

use super::report::{write_table_head, TraceReport, TraceRow};
use super::signs::same_class;
use crate::errors::TraceError;

const ALGORITHM: &str = "bisection";
const TITLE: &str = "Bisection Method";

/// Residual sentinel; large enough that the loop body always runs once.
pub(crate) const RESIDUAL_SENTINEL: f64 = 1000.0;

/// Bisection trace configuration.
///
/// Defaults reproduce the fixed demonstration: bracket [0, 2] with a
/// residual tolerance of 1e-7. Fields are not validated; a bracket whose
/// residuals never meet the tolerance keeps the loop alive indefinitely.
#[derive(Debug, Copy, Clone)]
pub struct BisectionTraceCfg {
    start_a: f64,
    start_b: f64,
    abs_fx: f64,
}

impl BisectionTraceCfg {
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

impl Default for BisectionTraceCfg {
    fn default() -> Self {
        Self {
            start_a: Self::DEFAULT_START_A,
            start_b: Self::DEFAULT_START_B,
            abs_fx: Self::DEFAULT_ABS_FX,
        }
    }
}

/// Runs the traced bisection loop, streaming one table row per pass to
/// `out` and the `<N> iterations` footer after convergence.
///
/// Every pass halves the bracket at its midpoint `c`, re-evaluates `func`
/// at `a`, `b`, and `c`, emits the row, and replaces `a` when f(c) and
/// f(a) fall in the same sign class, otherwise `b`. The loop exits once
/// |f(c)| drops to `cfg.abs_fx`; the row that meets the tolerance is still
/// emitted and its endpoint update still happens. There is no iteration
/// cap and no bracket validation.
///
/// # Errors
///
/// [`TraceError::Sink`] when `out` rejects a write.
pub fn bisection_trace<F, W>(
    mut func: F,
    cfg: BisectionTraceCfg,
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
        c = (a + b) / 2.0;
        let fa = func(a);
        let fb = func(b);
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

    debug!(root = c, residual = fc, iterations, "bisection trace converged");
    Ok(TraceReport {
        root: c,
        f_root: fc,
        iterations,
        rows,
        algorithm_name: ALGORITHM,
    })
}
