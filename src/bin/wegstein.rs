//! Prints fixed-point and Wegstein iteration traces for f(x) = x² − x − 1
//! rearranged as x = g(x) with g(x) = 1 + 1/x, then the final iterate of
//! each run.

use std::io::{self, Write};

use anyhow::Result;

use falsi::fixed_point::config::FixedPointCfg;
use falsi::fixed_point::fpi::fixed_point_trace;
use falsi::fixed_point::wegstein::{wegstein_secant_trace, wegstein_trace};
use falsi::logging;

const START: f64 = 2.0;

fn target(x: f64) -> f64 {
    x * x - x - 1.0
}

/// g(x) = 1 + 1/x, a contraction near the golden ratio.
fn contraction(x: f64) -> f64 {
    1.0 + 1.0 / x
}

fn main() -> Result<()> {
    logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let cfg = FixedPointCfg::new();

    let plain = fixed_point_trace(target, contraction, START, cfg, &mut out)?;
    writeln!(out, "{}", plain.x)?;

    let damped = wegstein_trace(target, contraction, START, None, cfg, &mut out)?;
    writeln!(out, "{}", damped.x)?;

    let secant = wegstein_secant_trace(target, contraction, START, cfg, &mut out)?;
    writeln!(out, "{}", secant.x)?;

    Ok(())
}
