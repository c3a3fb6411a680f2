//! Traced fixed-point iteration x ← g(x).

use std::io::Write;

use tracing::debug;

use super::config::FixedPointCfg;
use super::report::{FixedPointReport, FixedPointTermination, IterateRow};
use crate::errors::TraceError;

/// Iterates x ← g(x) from `x0`, emitting one `n  x_n` row per pass.
///
/// The residual |f(x)| is checked before every pass; the run stops when it
/// drops to `cfg.abs_fx` or the iteration cap is hit, whichever comes
/// first. Convergence requires g to be a contraction near the fixed point;
/// a non-contracting g stops at the cap with
/// [`FixedPointTermination::IterationLimit`].
///
/// # Errors
///
/// [`TraceError::Sink`] when `out` rejects a write.
pub fn fixed_point_trace<F, G, W>(
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

    let mut x = x0;
    let mut i = 0;
    while f(x).abs() > abs_fx && i < max_iter {
        writeln!(out, "{}", IterateRow { n: i, x })?;
        x = g(x);
        i += 1;
    }

    let f_x = f(x);
    let termination = if f_x.abs() <= abs_fx {
        FixedPointTermination::ToleranceReached
    } else {
        FixedPointTermination::IterationLimit
    };
    debug!(x, residual = f_x, iterations = i, "fixed-point trace stopped");

    Ok(FixedPointReport {
        x,
        f_x,
        iterations: i,
        termination,
    })
}
