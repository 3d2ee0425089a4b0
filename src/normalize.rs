//! Component A — Input Normalizer.
//!
//! Validates the three input collections and the merged parameter set, then
//! builds an indexed view: counts, the dense skill-compatibility matrix, and
//! the 14-day date horizon. Pure — no I/O.

use std::collections::HashSet;

use chrono::{Duration, Local, NaiveDate};

use crate::config::ScheduleParameters;
use crate::domain::{Employee, Location, ShiftTemplate};
use crate::error::CoreError;

pub const HORIZON_DAYS: usize = 14;

/// An indexed, validated view over the raw inputs. Everything downstream of
/// the Normalizer operates on indices `0..e`, `0..l`, `0..s`, `0..d` rather
/// than re-deriving compatibility or dates.
pub struct NormalizedInput<'a> {
    pub employees: &'a [Employee],
    pub locations: &'a [Location],
    pub shifts: &'a [ShiftTemplate],
    pub params: ScheduleParameters,
    /// `compat[e][l]` is true iff `skills(e) ∩ required(l) ≠ ∅`.
    ///
    /// A location with an empty `required_skills` set has an empty
    /// intersection with every employee's skill set, so it is unreachable —
    /// this is the locked semantics for the boundary case spec.md leaves
    /// open (see DESIGN.md).
    pub compat: Vec<Vec<bool>>,
    pub dates: Vec<NaiveDate>,
}

impl<'a> NormalizedInput<'a> {
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    pub fn day_count(&self) -> usize {
        self.dates.len()
    }
}

/// Validates and indexes the raw inputs. See `CoreError::InvalidInput` for
/// the exhaustive list of rejected shapes.
pub fn normalize<'a>(
    employees: &'a [Employee],
    locations: &'a [Location],
    shifts: &'a [ShiftTemplate],
    params: ScheduleParameters,
) -> Result<NormalizedInput<'a>, CoreError> {
    normalize_from(Local::now().date_naive(), employees, locations, shifts, params)
}

/// Same as [`normalize`] but with an injectable "today" for deterministic
/// testing of the date horizon.
pub fn normalize_from<'a>(
    today: NaiveDate,
    employees: &'a [Employee],
    locations: &'a [Location],
    shifts: &'a [ShiftTemplate],
    params: ScheduleParameters,
) -> Result<NormalizedInput<'a>, CoreError> {
    if employees.is_empty() {
        return Err(invalid("employees", "must contain at least one employee"));
    }
    if locations.is_empty() {
        return Err(invalid("locations", "must contain at least one location"));
    }
    if shifts.is_empty() {
        return Err(invalid("shifts", "must contain at least one shift template entry"));
    }

    reject_duplicate_ids("employees", employees.iter().map(|e| e.id.as_str()))?;
    reject_duplicate_ids("locations", locations.iter().map(|l| l.id.as_str()))?;
    reject_duplicate_ids("shifts", shifts.iter().map(|s| s.id.as_str()))?;

    for l in locations {
        if l.capacity == 0 {
            return Err(invalid(
                "locations.capacity",
                format!("location `{}` has non-positive capacity", l.id),
            ));
        }
    }

    let min_capacity = locations.iter().map(|l| l.capacity).min().unwrap_or(0);
    if params.min_employees_per_shift > min_capacity {
        return Err(invalid(
            "min_employees_per_shift",
            format!(
                "min_employees_per_shift ({}) exceeds the smallest location capacity ({})",
                params.min_employees_per_shift, min_capacity
            ),
        ));
    }
    if params.min_shifts_per_week > params.max_shifts_per_week {
        return Err(invalid(
            "min_shifts_per_week",
            format!(
                "min_shifts_per_week ({}) exceeds max_shifts_per_week ({})",
                params.min_shifts_per_week, params.max_shifts_per_week
            ),
        ));
    }

    let compat = employees
        .iter()
        .map(|e| {
            locations
                .iter()
                .map(|l| compatible(e, l))
                .collect::<Vec<bool>>()
        })
        .collect::<Vec<_>>();

    let dates = (0..HORIZON_DAYS as i64)
        .map(|i| today + Duration::days(i))
        .collect();

    Ok(NormalizedInput {
        employees,
        locations,
        shifts,
        params,
        compat,
        dates,
    })
}

/// `compatible(e, l) := skills(e) ∩ required(l) ≠ ∅`. A superset is not
/// required — one shared skill is sufficient. An empty `required_skills`
/// set makes the location unreachable by every employee.
pub fn compatible(employee: &Employee, location: &Location) -> bool {
    employee
        .skills
        .iter()
        .any(|s| location.required_skills.contains(s))
}

fn reject_duplicate_ids<'a>(
    field: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(invalid(field, format!("duplicate id `{id}`")));
        }
    }
    Ok(())
}

fn invalid(field: &str, reason: impl Into<String>) -> CoreError {
    CoreError::InvalidInput {
        field: field.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn shift(id: &str) -> ShiftTemplate {
        ShiftTemplate::new(
            id,
            id,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        )
    }

    #[test]
    fn empty_employees_is_rejected() {
        let locations = [Location::new("l1", "L1").with_required_skill("A")];
        let shifts = [shift("s1")];
        let err = normalize(&[], &locations, &shifts, ScheduleParameters::default()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { field, .. } if field == "employees"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let employees = [
            Employee::new("e1", "A").with_skill("X"),
            Employee::new("e1", "B").with_skill("X"),
        ];
        let locations = [Location::new("l1", "L1").with_required_skill("X")];
        let shifts = [shift("s1")];
        let err = normalize(&employees, &locations, &shifts, ScheduleParameters::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { field, .. } if field == "employees"));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let employees = [Employee::new("e1", "A").with_skill("X")];
        let locations = [Location::new("l1", "L1")
            .with_required_skill("X")
            .with_capacity(0)];
        let shifts = [shift("s1")];
        let err = normalize(&employees, &locations, &shifts, ScheduleParameters::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { field, .. } if field == "locations.capacity"));
    }

    #[test]
    fn min_per_shift_above_min_capacity_is_rejected() {
        let employees = [Employee::new("e1", "A").with_skill("X")];
        let locations = [Location::new("l1", "L1")
            .with_required_skill("X")
            .with_capacity(1)];
        let shifts = [shift("s1")];
        let mut params = ScheduleParameters::default();
        params.min_employees_per_shift = 2;
        let err = normalize(&employees, &locations, &shifts, params).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { field, .. } if field == "min_employees_per_shift"));
    }

    #[test]
    fn min_week_above_max_week_is_rejected() {
        let employees = [Employee::new("e1", "A").with_skill("X")];
        let locations = [Location::new("l1", "L1").with_required_skill("X")];
        let shifts = [shift("s1")];
        let mut params = ScheduleParameters::default();
        params.min_shifts_per_week = 11;
        params.max_shifts_per_week = 10;
        let err = normalize(&employees, &locations, &shifts, params).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { field, .. } if field == "min_shifts_per_week"));
    }

    #[test]
    fn empty_required_skills_means_unreachable() {
        let employee = Employee::new("e1", "A").with_skill("X");
        let location = Location::new("l1", "L1"); // no required_skills
        assert!(!compatible(&employee, &location));
    }

    #[test]
    fn overlap_without_superset_is_compatible() {
        let employee = Employee::new("e1", "A").with_skills(["X", "Y"]);
        let location = Location::new("l1", "L1").with_required_skills(["Y", "Z"]);
        assert!(compatible(&employee, &location));
    }

    #[test]
    fn dates_span_fourteen_days_from_today() {
        let employees = [Employee::new("e1", "A").with_skill("X")];
        let locations = [Location::new("l1", "L1").with_required_skill("X")];
        let shifts = [shift("s1")];
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let normalized =
            normalize_from(today, &employees, &locations, &shifts, ScheduleParameters::default())
                .unwrap();
        assert_eq!(normalized.dates.len(), HORIZON_DAYS);
        assert_eq!(normalized.dates[0], today);
        assert_eq!(normalized.dates[13], today + Duration::days(13));
    }
}
