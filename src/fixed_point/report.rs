//! Report types for the traced fixed-point iterations.

use std::fmt;

/// One `n  x_n` line of a fixed-point trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterateRow {
    pub n: usize,
    pub x: f64,
}

impl fmt::Display for IterateRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.n, self.x)
    }
}

/// Why a fixed-point run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedPointTermination {
    ToleranceReached,
    IterationLimit,
}

/// Final state of a fixed-point run.
///
/// - `x`           : last iterate
/// - `f_x`         : residual at `x`
/// - `iterations`  : completed iterations
/// - `termination` : why the run stopped
#[derive(Debug, Clone, Copy)]
pub struct FixedPointReport {
    pub x: f64,
    pub f_x: f64,
    pub iterations: usize,
    pub termination: FixedPointTermination,
}

/// Final state of a constant-q Wegstein run; `q` is the damping factor
/// actually used, whether supplied or computed.
#[derive(Debug, Clone, Copy)]
pub struct WegsteinReport {
    pub x: f64,
    pub f_x: f64,
    pub iterations: usize,
    pub termination: FixedPointTermination,
    pub q: f64,
}
