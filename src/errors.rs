//! Error type shared by the traced solvers.
//!
//! The iteration loops perform no numeric guarding; a degenerate step
//! surfaces as ±inf/NaN in the trace, never as an error. The only failure
//! reported through `Result` is the trace sink rejecting a write.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace sink write failed")]
    Sink(#[from] std::io::Error),
}
