//! Component B — Model Builder.
//!
//! Builds a CP-SAT model: one boolean decision variable per compatible
//! (employee, day, location, shift) tuple, the five hard constraints, and
//! the max-min fairness objective. Pure — no solving happens here, which
//! keeps this layer unit-testable without invoking the solver.

use cp_sat::builder::{BoolVar, CpModelBuilder, IntVar, LinearExpr};

use crate::normalize::NormalizedInput;

/// The decision-variable table plus everything the solver driver and
/// extractor need to interpret a solved model.
///
/// `vars` is a flat array indexed by `offset(e, d, l, s)` rather than a
/// hash map keyed by the 4-tuple: this removes hashing from constraint
/// emission and keeps the support tuples contiguous in memory. The `Option`
/// tag doubles as the support bitmap — `None` means the tuple was never in
/// the support (the (e, l) pair was skill-incompatible) and contributes 0
/// to every sum without a variable ever being created for it.
pub struct ShiftModel {
    pub builder: CpModelBuilder,
    pub vars: Vec<Option<BoolVar>>,
    pub fairness_floor: IntVar,
    pub employee_count: usize,
    pub day_count: usize,
    pub location_count: usize,
    pub shift_count: usize,
}

impl ShiftModel {
    #[inline]
    pub fn offset(&self, e: usize, d: usize, l: usize, s: usize) -> usize {
        ((e * self.day_count + d) * self.location_count + l) * self.shift_count + s
    }

    #[inline]
    pub fn var(&self, e: usize, d: usize, l: usize, s: usize) -> Option<&BoolVar> {
        self.vars[self.offset(e, d, l, s)].as_ref()
    }
}

/// Builds decision variables and all five hard constraints plus the
/// fairness objective over `input`.
pub fn build(input: &NormalizedInput) -> ShiftModel {
    let e_count = input.employee_count();
    let d_count = input.day_count();
    let l_count = input.location_count();
    let s_count = input.shift_count();

    let mut builder = CpModelBuilder::default();
    let mut vars: Vec<Option<BoolVar>> = Vec::with_capacity(e_count * d_count * l_count * s_count);

    for e in 0..e_count {
        for d in 0..d_count {
            for l in 0..l_count {
                for s in 0..s_count {
                    if input.compat[e][l] {
                        vars.push(Some(builder.new_bool_var()));
                    } else {
                        vars.push(None);
                    }
                }
            }
        }
    }

    let idx = |e: usize, d: usize, l: usize, s: usize| -> usize {
        ((e * d_count + d) * l_count + l) * s_count + s
    };

    // Constraint 1 + 2 — minimum coverage and capacity, per (d, l, s) cell.
    for d in 0..d_count {
        for l in 0..l_count {
            for s in 0..s_count {
                let cell: Vec<BoolVar> = (0..e_count)
                    .filter_map(|e| vars[idx(e, d, l, s)].clone())
                    .collect();
                if cell.is_empty() {
                    continue;
                }
                let sum = sum_of(&cell);
                if input.params.min_employees_per_shift > 0 {
                    builder.add_ge(sum.clone(), input.params.min_employees_per_shift as i64);
                }
                builder.add_le(sum, input.locations[l].capacity as i64);
            }
        }
    }

    // Constraint 3 — no simultaneous double-booking across locations.
    for e in 0..e_count {
        for d in 0..d_count {
            for s in 0..s_count {
                let cell: Vec<BoolVar> = (0..l_count)
                    .filter_map(|l| vars[idx(e, d, l, s)].clone())
                    .collect();
                if cell.is_empty() {
                    continue;
                }
                builder.add_le(sum_of(&cell), 1i64);
            }
        }
    }

    // Constraint 4 — no adjacent-shift stacking within a day. Wrap-around
    // into the next day is deliberately not constrained.
    for e in 0..e_count {
        for d in 0..d_count {
            for s in 0..s_count.saturating_sub(1) {
                let first: Vec<BoolVar> = (0..l_count)
                    .filter_map(|l| vars[idx(e, d, l, s)].clone())
                    .collect();
                let second: Vec<BoolVar> = (0..l_count)
                    .filter_map(|l| vars[idx(e, d, l, s + 1)].clone())
                    .collect();
                if first.is_empty() && second.is_empty() {
                    continue;
                }
                let combined = sum_of(&first) + sum_of(&second);
                builder.add_le(combined, 1i64);
            }
        }
    }

    // Constraint 5 — weekly volume bounds, clipped to the horizon.
    for e in 0..e_count {
        for week in 0..2usize {
            let week_start = week * 7;
            let week_end = (week_start + 7).min(d_count);
            if week_start >= week_end {
                continue;
            }
            let week_vars: Vec<BoolVar> = (week_start..week_end)
                .flat_map(|d| (0..l_count).flat_map(move |l| (0..s_count).map(move |s| (d, l, s))))
                .filter_map(|(d, l, s)| vars[idx(e, d, l, s)].clone())
                .collect();
            if week_vars.is_empty() {
                continue;
            }
            let sum = sum_of(&week_vars);
            builder.add_ge(sum.clone(), input.params.min_shifts_per_week as i64);
            builder.add_le(sum, input.params.max_shifts_per_week as i64);
        }
    }

    // Objective — max-min fairness. `m <= T_e` for every employee, then
    // maximize `m`; the solver pushes the floor up as high as feasibility
    // allows, which is the standard linear relaxation of a min-equality
    // global constraint and avoids introducing one.
    let upper_bound = (d_count * l_count * s_count) as i64;
    let fairness_floor = builder.new_int_var(vec![(0, upper_bound)]);
    for e in 0..e_count {
        let total_vars: Vec<BoolVar> = (0..d_count)
            .flat_map(|d| (0..l_count).flat_map(move |l| (0..s_count).map(move |s| (d, l, s))))
            .filter_map(|(d, l, s)| vars[idx(e, d, l, s)].clone())
            .collect();
        let total = sum_of(&total_vars);
        builder.add_le(LinearExpr::from(fairness_floor.clone()), total);
    }
    builder.maximize(LinearExpr::from(fairness_floor.clone()));

    ShiftModel {
        builder,
        vars,
        fairness_floor,
        employee_count: e_count,
        day_count: d_count,
        location_count: l_count,
        shift_count: s_count,
    }
}

fn sum_of(vars: &[BoolVar]) -> LinearExpr {
    vars.iter().cloned().map(|v| (1i64, v)).collect()
}
