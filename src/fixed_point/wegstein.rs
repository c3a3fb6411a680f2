//! Traced Wegstein iteration, constant-q and secant-updated variants.

use std::io::Write;

use tracing::debug;

use super::config::FixedPointCfg;
use super::report::{FixedPointReport, FixedPointTermination, IterateRow, WegsteinReport};
use crate::errors::TraceError;

/// Near-optimal constant damping factor from three leading g-iterates.
///
/// With a = (x3 − x2)/(x2 − x1) approximating g' at the fixed point, the
/// damped iteration q·x + (1 − q)·g(x) converges fastest at q = a/(a − 1).
/// The intermediate slope is echoed as an `a = …` line.
fn near_optimal_q<G, W>(g: &mut G, x0: f64, out: &mut W) -> Result<f64, TraceError>
where
    G: FnMut(f64) -> f64,
    W: Write,
{
    let x1 = x0;
    let x2 = g(x1);
    let x3 = g(x2);
    let a = (x3 - x2) / (x2 - x1);
    writeln!(out, "a = {a}")?;
    Ok(a / (a - 1.0))
}

/// Constant-q Wegstein: x ← q·x + (1 − q)·g(x).
///
/// When `q` is `None` the damping factor comes from [`near_optimal_q`];
/// either way the factor in effect is echoed as a `q = …` line before the
/// trace and recorded in the report. Stopping behavior matches
/// [`fixed_point_trace`](super::fpi::fixed_point_trace).
///
/// # Errors
///
/// [`TraceError::Sink`] when `out` rejects a write.
pub fn wegstein_trace<F, G, W>(
    mut f: F,
    mut g: G,
    x0: f64,
    q: Option<f64>,
    cfg: FixedPointCfg,
    out: &mut W,
) -> Result<WegsteinReport, TraceError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    W: Write,
{
    let abs_fx = cfg.abs_fx();
    let max_iter = cfg.max_iter();

    let q = match q {
        Some(q) => q,
        None => near_optimal_q(&mut g, x0, out)?,
    };
    writeln!(out, "q = {q}")?;

    let mut x = x0;
    let mut i = 0;
    while f(x).abs() > abs_fx && i < max_iter {
        writeln!(out, "{}", IterateRow { n: i, x })?;
        x = q * x + (1.0 - q) * g(x);
        i += 1;
    }

    let f_x = f(x);
    let termination = if f_x.abs() <= abs_fx {
        FixedPointTermination::ToleranceReached
    } else {
        FixedPointTermination::IterationLimit
    };
    debug!(x, residual = f_x, iterations = i, q, "wegstein trace stopped");

    Ok(WegsteinReport {
        x,
        f_x,
        iterations: i,
        termination,
        q,
    })
}

/// Secant-updated Wegstein: each step intersects the secant through the
/// two most recent (x, g(x)) pairs with the line y = x.
///
/// Two seed rows come from `x0` and g(x0); every later row is one secant
/// step. `iterations` counts the index of the last emitted iterate, and
/// the run stops once |f(x)| drops to `cfg.abs_fx` or the cap is hit.
///
/// # Errors
///
/// [`TraceError::Sink`] when `out` rejects a write.
pub fn wegstein_secant_trace<F, G, W>(
    mut f: F,
    mut g: G,
    x0: f64,
    cfg: FixedPointCfg,
    out: &mut W,
) -> Result<FixedPointReport, TraceError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    W: Write,
{
    let abs_fx = cfg.abs_fx();
    let max_iter = cfg.max_iter();

    let mut x_prev = x0;
    let mut g_prev = g(x_prev);
    let mut x = g_prev;
    let mut g_x = g(x);

    writeln!(out, "{}", IterateRow { n: 0, x: x_prev })?;
    writeln!(out, "{}", IterateRow { n: 1, x })?;

    let mut i = 1;
    while f(x).abs() > abs_fx && i < max_iter {
        let x_next = (x_prev * g_x - x * g_prev) / (x_prev + g_x - x - g_prev);
        i += 1;
        writeln!(out, "{}", IterateRow { n: i, x: x_next })?;

        x_prev = x;
        g_prev = g_x;
        x = x_next;
        g_x = g(x);
    }

    let f_x = f(x);
    let termination = if f_x.abs() <= abs_fx {
        FixedPointTermination::ToleranceReached
    } else {
        FixedPointTermination::IterationLimit
    };
    debug!(x, residual = f_x, iterations = i, "wegstein secant trace stopped");

    Ok(FixedPointReport {
        x,
        f_x,
        iterations: i,
        termination,
    })
}
