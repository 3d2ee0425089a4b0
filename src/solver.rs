//! Component C — Solver Driver.
//!
//! Runs the CP-SAT model with a wall-clock budget and classifies the
//! verdict. The budget is advisory: the driver does not interrupt the
//! solver itself, it simply reports whatever verdict comes back.

use cp_sat::proto::{CpSolverResponse, CpSolverStatus, SatParameters};

use crate::error::{CoreError, TightConstraintClass};
use crate::model::ShiftModel;
use crate::normalize::NormalizedInput;

/// The classified outcome of a solve: a success status plus the native
/// response needed by the extractor to read variable assignments back.
pub struct SolveOutcome {
    pub status: SolverStatus,
    pub response: CpSolverResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    Optimal,
    Feasible,
}

impl SolverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolverStatus::Optimal => "OPTIMAL",
            SolverStatus::Feasible => "FEASIBLE",
        }
    }
}

/// Solves `model` with the given wall-clock budget, translating the native
/// verdict into a [`SolveOutcome`] or a [`CoreError`]. `input` is consulted
/// only to produce a likely-tight-constraint diagnostic on infeasibility.
pub fn solve(
    model: &mut ShiftModel,
    input: &NormalizedInput,
    time_limit_secs: f64,
) -> Result<SolveOutcome, CoreError> {
    let mut params = SatParameters::default();
    params.max_time_in_seconds = Some(time_limit_secs);

    tracing::debug!(time_limit_secs, "starting CP-SAT solve");
    let response = model.builder.solve_with_parameters(&params);

    match response.status() {
        CpSolverStatus::Optimal => Ok(SolveOutcome {
            status: SolverStatus::Optimal,
            response,
        }),
        CpSolverStatus::Feasible => Ok(SolveOutcome {
            status: SolverStatus::Feasible,
            response,
        }),
        CpSolverStatus::Infeasible => Err(CoreError::InfeasibleModel {
            likely_tight: classify_infeasibility(input),
        }),
        CpSolverStatus::Unknown => Err(CoreError::SolverTimeout {
            budget_secs: time_limit_secs,
        }),
        other => Err(CoreError::SolverInternal {
            native_status: format!("{other:?}"),
        }),
    }
}

/// A best-effort guess at which hard-constraint class is most likely
/// responsible for an infeasible model. This inspects only aggregate
/// counts, never the solver's internal proof, so it is a diagnostic hint
/// for the caller, not a certificate.
fn classify_infeasibility(input: &NormalizedInput) -> TightConstraintClass {
    let e = input.employee_count() as u64;
    let d = input.day_count() as u64;
    let l = input.location_count() as u64;
    let s = input.shift_count() as u64;
    let min_per_shift = input.params.min_employees_per_shift as u64;
    let max_week = input.params.max_shifts_per_week as u64;
    let min_week = input.params.min_shifts_per_week as u64;

    let weeks = (d as f64 / 7.0).ceil() as u64;
    let total_required = d * l * s * min_per_shift;
    let total_available = e * max_week * weeks;
    if total_available < total_required {
        return TightConstraintClass::Coverage;
    }

    let total_capacity: u64 = input.locations.iter().map(|loc| loc.capacity as u64).sum();
    if total_capacity * d * s < total_required {
        return TightConstraintClass::Capacity;
    }

    if e * max_week < total_required || min_week > max_week {
        return TightConstraintClass::WeeklyBounds;
    }

    TightConstraintClass::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleParameters;
    use crate::domain::{Employee, Location, ShiftTemplate};
    use crate::normalize::normalize;
    use chrono::NaiveTime;

    /// T5 — two employees cannot cover a 3-per-shift minimum.
    #[test]
    fn classifies_undersized_roster_as_coverage() {
        let employees = [
            Employee::new("e1", "A").with_skill("X"),
            Employee::new("e2", "B").with_skill("X"),
        ];
        let locations = [Location::new("l1", "L1")
            .with_required_skill("X")
            .with_capacity(10)];
        let shifts = [ShiftTemplate::new(
            "s1",
            "Morning",
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        )];
        let mut params = ScheduleParameters::default();
        params.min_employees_per_shift = 3;
        let input = normalize(&employees, &locations, &shifts, params).unwrap();
        assert_eq!(classify_infeasibility(&input), TightConstraintClass::Coverage);
    }
}
