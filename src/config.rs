//! Tunable parameters for the model builder and solver driver.

use serde::{Deserialize, Serialize};

/// The five tunables the core respects. Defaults mirror the reference
/// implementation this crate's algorithms are grounded on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleParameters {
    pub min_employees_per_shift: u32,
    pub min_shifts_per_week: u32,
    pub max_shifts_per_week: u32,
    pub default_location_capacity: u32,
    pub solve_time_limit_secs: f64,
}

impl Default for ScheduleParameters {
    fn default() -> Self {
        Self {
            min_employees_per_shift: 2,
            min_shifts_per_week: 5,
            max_shifts_per_week: 10,
            default_location_capacity: 20,
            solve_time_limit_secs: 60.0,
        }
    }
}

/// A partial configuration override returned by an external advisor.
///
/// Only the three fields below are honored by the Orchestrator; any richer
/// suggestion an advisor might produce is out of scope and ignored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_employees_per_shift: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_shifts_per_week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_shifts_per_week: Option<u32>,
}

impl ScheduleParameters {
    /// Merges an advisor override into these parameters, honoring only the
    /// documented subset of keys.
    pub fn merged_with(mut self, overrides: Option<&AdvisorOverride>) -> Self {
        if let Some(o) = overrides {
            if let Some(v) = o.min_employees_per_shift {
                self.min_employees_per_shift = v;
            }
            if let Some(v) = o.max_shifts_per_week {
                self.max_shifts_per_week = v;
            }
            if let Some(v) = o.min_shifts_per_week {
                self.min_shifts_per_week = v;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_match_reference() {
        let p = ScheduleParameters::default();
        assert_eq!(p.min_employees_per_shift, 2);
        assert_eq!(p.min_shifts_per_week, 5);
        assert_eq!(p.max_shifts_per_week, 10);
        assert_eq!(p.default_location_capacity, 20);
    }

    #[test]
    fn override_only_touches_documented_keys() {
        let base = ScheduleParameters::default();
        let overrides = AdvisorOverride {
            min_employees_per_shift: Some(3),
            max_shifts_per_week: None,
            min_shifts_per_week: None,
        };
        let merged = base.merged_with(Some(&overrides));
        assert_eq!(merged.min_employees_per_shift, 3);
        assert_eq!(merged.max_shifts_per_week, base.max_shifts_per_week);
        assert_eq!(merged.min_shifts_per_week, base.min_shifts_per_week);
        assert_eq!(
            merged.default_location_capacity,
            base.default_location_capacity
        );
    }

    #[test]
    fn no_override_is_identity() {
        let base = ScheduleParameters::default();
        assert_eq!(base.merged_with(None), base);
    }
}
