//! The external advisor boundary.
//!
//! The advisor (an LLM-based pre-analysis step in the system this crate is
//! the core of) is modeled as an opaque collaborator returning a partial
//! configuration override. Only `{min_employees_per_shift,
//! max_shifts_per_week, min_shifts_per_week}` are honored by the
//! Orchestrator; any richer suggestion is out of scope here and is not
//! inspected or inferred from.

use crate::config::AdvisorOverride;

/// An opaque source of constraint overrides. The default implementation
/// used when no advisor is wired in simply suggests no changes.
pub trait Advisor {
    fn suggest_overrides(&self) -> Option<AdvisorOverride>;
}

/// The no-op advisor: always suggests leaving the defaults untouched.
pub struct NoAdvisor;

impl Advisor for NoAdvisor {
    fn suggest_overrides(&self) -> Option<AdvisorOverride> {
        None
    }
}

/// An advisor that always returns a fixed override bundle, useful for
/// wiring in whatever an upstream LLM pre-analysis step produced.
pub struct FixedAdvisor(pub AdvisorOverride);

impl Advisor for FixedAdvisor {
    fn suggest_overrides(&self) -> Option<AdvisorOverride> {
        Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_advisor_suggests_nothing() {
        assert!(NoAdvisor.suggest_overrides().is_none());
    }

    #[test]
    fn fixed_advisor_echoes_its_override() {
        let advisor = FixedAdvisor(AdvisorOverride {
            min_employees_per_shift: Some(3),
            ..Default::default()
        });
        let suggestion = advisor.suggest_overrides().unwrap();
        assert_eq!(suggestion.min_employees_per_shift, Some(3));
    }
}
