//! Iteration traces for classical scalar root-finding methods.
//!
//! Each solver runs the textbook loop unchanged and streams one formatted
//! trace line per pass to a caller-supplied sink, returning a structured
//! report of the final state. Two families are covered:
//!
//! - [`root_finding`] : bracketing methods (bisection, false position)
//!   over a sign-changing interval
//! - [`fixed_point`]  : fixed-point iteration x ← g(x) and Wegstein's
//!   acceleration of it

// shared plumbing
pub mod errors;
pub mod logging;

// traced method families
pub mod fixed_point;
pub mod root_finding;
