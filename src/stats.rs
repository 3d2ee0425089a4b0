//! Component E — Statistics Engine.
//!
//! A single pure fold over the extracted assignment list, producing
//! per-employee/location/day/shift-type counts plus fairness, load-balance
//! and diversity scores. No side effects, no mutation of the extractor's
//! output — this is what makes it property-testable against hand-authored
//! fixtures independent of the solver.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::domain::Assignment;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FairnessSummary {
    pub min_shifts: usize,
    pub max_shifts: usize,
    pub variance: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoadBalancingSummary {
    pub score: f64,
    pub coefficient_of_variation: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationDistributionSummary {
    pub multi_location_employees: usize,
    pub diversity_rate: f64,
    pub avg_per_employee: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OptimizationSummary {
    pub fairness: FairnessSummary,
    pub load_balancing: LoadBalancingSummary,
    pub location_distribution: LocationDistributionSummary,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Statistics {
    pub total_assignments: usize,
    pub shifts_per_employee: BTreeMap<String, usize>,
    pub shifts_per_location: BTreeMap<String, usize>,
    pub shifts_per_day: BTreeMap<String, usize>,
    pub shifts_per_type: BTreeMap<String, usize>,
    pub min_shifts_per_employee: usize,
    pub max_shifts_per_employee: usize,
    pub avg_shifts_per_employee: f64,
    pub load_balance_score: f64,
    pub location_diversity: BTreeMap<String, usize>,
    pub employees_multi_location: usize,
    pub location_diversity_rate: f64,
    pub avg_locations_per_employee: f64,
    pub avg_shift_diversity: f64,
    pub conflicts_detected: u32,
    pub optimization_summary: OptimizationSummary,
}

/// Computes the full statistics package over `schedule`.
///
/// `shift_template_len` is the count of distinct shift types in the
/// template (`S` in the spec's glossary) — it is passed in rather than
/// re-derived from the schedule so the Shannon-entropy normalization uses
/// the template's cardinality even when some shift type never appears in
/// any assignment.
pub fn compute(schedule: &[Assignment], shift_template_len: usize) -> Statistics {
    let mut shifts_per_employee: HashMap<String, usize> = HashMap::new();
    let mut shifts_per_location: BTreeMap<String, usize> = BTreeMap::new();
    let mut shifts_per_day: BTreeMap<String, usize> = BTreeMap::new();
    let mut shifts_per_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut employee_locations: HashMap<String, HashSet<String>> = HashMap::new();
    let mut employee_shift_types: HashMap<String, HashMap<String, usize>> = HashMap::new();

    for a in schedule {
        *shifts_per_employee.entry(a.employee_id.clone()).or_insert(0) += 1;
        *shifts_per_location.entry(a.location_id.clone()).or_insert(0) += 1;
        *shifts_per_day.entry(a.date.to_string()).or_insert(0) += 1;
        *shifts_per_type.entry(a.shift_id.clone()).or_insert(0) += 1;

        employee_locations
            .entry(a.employee_id.clone())
            .or_default()
            .insert(a.location_id.clone());
        *employee_shift_types
            .entry(a.employee_id.clone())
            .or_default()
            .entry(a.shift_id.clone())
            .or_insert(0) += 1;
    }

    let shift_values: Vec<usize> = shifts_per_employee.values().copied().collect();

    let (avg_shifts, variance, coefficient_of_variation, load_balance_score) =
        if shift_values.is_empty() {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let n = shift_values.len() as f64;
            let avg = shift_values.iter().sum::<usize>() as f64 / n;
            let variance = shift_values
                .iter()
                .map(|&v| (v as f64 - avg).powi(2))
                .sum::<f64>()
                / n;
            let std_dev = variance.sqrt();
            let cv = if avg > 0.0 { std_dev / avg } else { 0.0 };
            let score = (100.0 * (1.0 - cv)).clamp(0.0, 100.0);
            (avg, variance, cv, score)
        };

    let min_shifts_per_employee = shift_values.iter().copied().min().unwrap_or(0);
    let max_shifts_per_employee = shift_values.iter().copied().max().unwrap_or(0);

    let location_diversity: BTreeMap<String, usize> = employee_locations
        .iter()
        .map(|(id, locs)| (id.clone(), locs.len()))
        .collect();
    let employees_multi_location = location_diversity.values().filter(|&&c| c >= 2).count();
    let location_diversity_rate = if location_diversity.is_empty() {
        0.0
    } else {
        100.0 * employees_multi_location as f64 / location_diversity.len() as f64
    };
    let avg_locations_per_employee = if location_diversity.is_empty() {
        0.0
    } else {
        location_diversity.values().sum::<usize>() as f64 / location_diversity.len() as f64
    };

    let max_entropy = (shift_template_len.max(1) as f64).log2();
    let diversity_scores: Vec<f64> = employee_shift_types
        .values()
        .map(|dist| {
            let total: usize = dist.values().sum();
            if total == 0 {
                return 0.0;
            }
            let entropy = -dist
                .values()
                .map(|&count| {
                    if count == 0 {
                        0.0
                    } else {
                        let p = count as f64 / total as f64;
                        p * p.log2()
                    }
                })
                .sum::<f64>();
            if max_entropy > 0.0 {
                (entropy / max_entropy) * 100.0
            } else {
                0.0
            }
        })
        .collect();
    let avg_shift_diversity = if diversity_scores.is_empty() {
        0.0
    } else {
        diversity_scores.iter().sum::<f64>() / diversity_scores.len() as f64
    };

    let shifts_per_employee: BTreeMap<String, usize> = shifts_per_employee.into_iter().collect();

    let optimization_summary = OptimizationSummary {
        fairness: FairnessSummary {
            min_shifts: min_shifts_per_employee,
            max_shifts: max_shifts_per_employee,
            variance: round2(variance),
            score: round2(load_balance_score),
        },
        load_balancing: LoadBalancingSummary {
            score: round2(load_balance_score),
            coefficient_of_variation: round4(coefficient_of_variation),
        },
        location_distribution: LocationDistributionSummary {
            multi_location_employees: employees_multi_location,
            diversity_rate: round2(location_diversity_rate),
            avg_per_employee: round2(avg_locations_per_employee),
        },
    };

    Statistics {
        total_assignments: schedule.len(),
        shifts_per_employee,
        shifts_per_location,
        shifts_per_day,
        shifts_per_type,
        min_shifts_per_employee,
        max_shifts_per_employee,
        avg_shifts_per_employee: round2(avg_shifts),
        load_balance_score: round2(load_balance_score),
        location_diversity,
        employees_multi_location,
        location_diversity_rate: round2(location_diversity_rate),
        avg_locations_per_employee: round2(avg_locations_per_employee),
        avg_shift_diversity: round2(avg_shift_diversity),
        conflicts_detected: 0,
        optimization_summary,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn assignment(emp: &str, day: u32, loc: &str, shift: &str) -> Assignment {
        Assignment {
            employee_id: emp.to_string(),
            employee_name: emp.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            location_id: loc.to_string(),
            location_name: loc.to_string(),
            shift_id: shift.to_string(),
            shift_name: shift.to_string(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_schedule_yields_zeroed_statistics() {
        let stats = compute(&[], 3);
        assert_eq!(stats.total_assignments, 0);
        assert_eq!(stats.load_balance_score, 0.0);
        assert_eq!(stats.min_shifts_per_employee, 0);
        assert_eq!(stats.max_shifts_per_employee, 0);
    }

    /// T6 — four employees with identical counts of 6 shifts each.
    #[test]
    fn perfectly_balanced_schedule_scores_one_hundred() {
        let mut schedule = Vec::new();
        for emp in ["e1", "e2", "e3", "e4"] {
            for day in 1..=6 {
                schedule.push(assignment(emp, day, "l1", "morning"));
            }
        }
        let stats = compute(&schedule, 3);
        assert_eq!(stats.load_balance_score, 100.0);
        assert_eq!(stats.optimization_summary.load_balancing.coefficient_of_variation, 0.0);
        assert_eq!(stats.min_shifts_per_employee, 6);
        assert_eq!(stats.max_shifts_per_employee, 6);
    }

    #[test]
    fn uniform_shift_type_distribution_scores_max_diversity() {
        let mut schedule = Vec::new();
        for shift in ["morning", "afternoon", "evening"] {
            schedule.push(assignment("e1", 1, "l1", shift));
        }
        let stats = compute(&schedule, 3);
        assert_eq!(stats.avg_shift_diversity, 100.0);
    }

    #[test]
    fn single_shift_type_scores_zero_diversity() {
        let schedule = vec![assignment("e1", 1, "l1", "morning")];
        let stats = compute(&schedule, 3);
        assert_eq!(stats.avg_shift_diversity, 0.0);
    }

    #[test]
    fn multi_location_rate_counts_employees_at_two_or_more_locations() {
        let schedule = vec![
            assignment("e1", 1, "l1", "morning"),
            assignment("e1", 2, "l2", "morning"),
            assignment("e2", 1, "l1", "morning"),
        ];
        let stats = compute(&schedule, 3);
        assert_eq!(stats.employees_multi_location, 1);
        assert_eq!(stats.location_diversity_rate, 50.0);
    }

    #[test]
    fn total_assignments_matches_schedule_length() {
        let schedule = vec![
            assignment("e1", 1, "l1", "morning"),
            assignment("e2", 1, "l1", "morning"),
        ];
        let stats = compute(&schedule, 3);
        assert_eq!(stats.total_assignments, schedule.len());
    }
}
