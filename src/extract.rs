//! Component D — Schedule Extractor.
//!
//! Reads variable assignments back into a flat, denormalized list of
//! [`Assignment`] records, in lexicographic `(e, d, l, s)` order.

use crate::domain::Assignment;
use crate::model::ShiftModel;
use crate::normalize::NormalizedInput;
use crate::solver::SolveOutcome;

pub fn extract(input: &NormalizedInput, model: &ShiftModel, outcome: &SolveOutcome) -> Vec<Assignment> {
    let mut schedule = Vec::new();

    for e in 0..model.employee_count {
        for d in 0..model.day_count {
            for l in 0..model.location_count {
                for s in 0..model.shift_count {
                    let Some(var) = model.var(e, d, l, s) else {
                        continue;
                    };
                    if !var.solution_value(&outcome.response) {
                        continue;
                    }
                    let employee = &input.employees[e];
                    let location = &input.locations[l];
                    let shift = &input.shifts[s];
                    schedule.push(Assignment {
                        employee_id: employee.id.clone(),
                        employee_name: employee.name.clone(),
                        date: input.dates[d],
                        location_id: location.id.clone(),
                        location_name: location.name.clone(),
                        shift_id: shift.id.clone(),
                        shift_name: shift.name.clone(),
                        start_time: shift.start_time,
                        end_time: shift.end_time,
                    });
                }
            }
        }
    }

    schedule
}
