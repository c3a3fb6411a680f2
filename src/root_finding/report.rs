//! Defines the [`TraceRow`] and [`TraceReport`] types produced by the
//! traced bracketing solvers, plus the table chrome they share.

use std::fmt;
use std::io::{self, Write};

/// Width of the separator rule under each table header.
pub const RULE_WIDTH: usize = 88;

/// One row of the six-column iteration trace: the bracket `[a, b]`, the
/// trial point `c`, and the residuals at all three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub fa: f64,
    pub fb: f64,
    pub fc: f64,
}

impl fmt::Display for TraceRow {
    /// Tab-separated, six decimals per value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            self.a, self.b, self.c, self.fa, self.fb, self.fc
        )
    }
}

/// Final state of one traced phase.
///
/// - `root`           : last trial point `c`
/// - `f_root`         : residual at `root`
/// - `iterations`     : loop passes performed
/// - `rows`           : every emitted trace row, in order
/// - `algorithm_name` : e.g. `"bisection"`
#[derive(Debug, Clone)]
pub struct TraceReport {
    pub root: f64,
    pub f_root: f64,
    pub iterations: usize,
    pub rows: Vec<TraceRow>,
    pub algorithm_name: &'static str,
}

/// Writes the phase title, column header, and separator rule.
pub(crate) fn write_table_head<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "a\t\tb\t\tc\t\tf(a)\t\tf(b)\t\tf(c)")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}
