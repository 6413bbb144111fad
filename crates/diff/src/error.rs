//! Internal anomaly taxonomy.
//!
//! None of these propagate: the public entry points are infallible.
//! Anomalies are routed to the `log` facade when
//! `Options::log_errors` is set and dropped otherwise.

/// Conditions the walk encounters that are diagnostic, not failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Anomaly {
    /// Descent stopped at the configured maximum depth; the branch is
    /// unexamined, not different.
    #[error("recursed to maximum depth")]
    MaxDepthExceeded,

    /// The two values have different dynamic types; reported as one
    /// difference, no structural descent.
    #[error("values are of different dynamic types")]
    TypeMismatch,

    /// A leaf kind with no comparison rule; judged equal by policy.
    #[error("cannot compare values of kind {0}")]
    UnsupportedKind(String),
}
