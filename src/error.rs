//! Error taxonomy for the core pipeline.
//!
//! Every error surfaces to the caller of [`crate::generate`]; there are no
//! local retries. A `FEASIBLE` solver verdict is a success, not an error.

use thiserror::Error;

/// The class of tight constraint a solver's infeasibility is most likely
/// attributable to. This is a best-effort diagnostic, not a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TightConstraintClass {
    Coverage,
    Capacity,
    WeeklyBounds,
    Unknown,
}

impl std::fmt::Display for TightConstraintClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TightConstraintClass::Coverage => "coverage",
            TightConstraintClass::Capacity => "capacity",
            TightConstraintClass::WeeklyBounds => "weekly_bounds",
            TightConstraintClass::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation in the Input Normalizer. Non-retryable.
    #[error("invalid input: field `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// The solver proved the model infeasible under the given constraints.
    /// Non-retryable without a parameter change.
    #[error("model is infeasible (likely tight: {likely_tight})")]
    InfeasibleModel { likely_tight: TightConstraintClass },

    /// The solver returned without any feasible solution inside the
    /// wall-clock budget. The caller may retry with a larger budget.
    #[error("solver timed out after {budget_secs}s without a feasible solution")]
    SolverTimeout { budget_secs: f64 },

    /// The solver returned a non-terminal status outside the above cases.
    /// Fatal for this run.
    #[error("solver returned an unexpected status: {native_status}")]
    SolverInternal { native_status: String },
}
