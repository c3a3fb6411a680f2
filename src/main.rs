//! Prints the bisection and false-position iteration traces for
//! f(x) = x² − x − 1 over [0, 2], one table per phase.

use std::io::{self, Write};

use anyhow::Result;

use falsi::logging;
use falsi::root_finding::bisection::{bisection_trace, BisectionTraceCfg};
use falsi::root_finding::false_position::{false_position_trace, FalsePositionTraceCfg};

/// f(x) = x² − x − 1; the positive root is the golden ratio.
fn target(x: f64) -> f64 {
    x * x - x - 1.0
}

fn main() -> Result<()> {
    logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    bisection_trace(target, BisectionTraceCfg::new(), &mut out)?;
    writeln!(out)?;
    false_position_trace(target, FalsePositionTraceCfg::new(), &mut out)?;

    Ok(())
}
