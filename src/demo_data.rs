//! Demo data generators for the shift scheduling problem.
//!
//! Produces a medical-staffing flavored instance (locations are hospital
//! wards, skills are clinical roles) for the thin HTTP boundary and for
//! tests that need a roster larger than a hand-authored fixture.

use chrono::NaiveTime;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{Employee, Location, ShiftTemplate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoData {
    Small,
    Large,
}

impl std::str::FromStr for DemoData {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SMALL" => Ok(DemoData::Small),
            "LARGE" => Ok(DemoData::Large),
            _ => Err(()),
        }
    }
}

impl DemoData {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoData::Small => "SMALL",
            DemoData::Large => "LARGE",
        }
    }

    fn parameters(&self) -> DemoDataParameters {
        match self {
            DemoData::Small => DemoDataParameters {
                locations: vec![
                    ("Ambulatory care", 6),
                    ("Critical care", 5),
                    ("Pediatric care", 5),
                ],
                required_skills: vec!["Doctor", "Nurse"],
                optional_skills: vec!["Anaesthetics", "Cardiology"],
                employee_count: 15,
                optional_skill_distribution: vec![(1, 3.0), (2, 1.0)],
            },
            DemoData::Large => DemoDataParameters {
                locations: vec![
                    ("Ambulatory care", 14),
                    ("Neurology", 10),
                    ("Critical care", 12),
                    ("Pediatric care", 10),
                    ("Surgery", 8),
                    ("Radiology", 8),
                    ("Outpatient", 10),
                ],
                required_skills: vec!["Doctor", "Nurse"],
                optional_skills: vec!["Anaesthetics", "Cardiology", "Radiology"],
                employee_count: 50,
                optional_skill_distribution: vec![(1, 3.0), (2, 1.0)],
            },
        }
    }
}

struct DemoDataParameters {
    locations: Vec<(&'static str, u32)>,
    required_skills: Vec<&'static str>,
    optional_skills: Vec<&'static str>,
    employee_count: usize,
    optional_skill_distribution: Vec<(usize, f64)>,
}

/// List of available demo data sets.
pub fn list_demo_data() -> Vec<&'static str> {
    vec!["SMALL", "LARGE"]
}

/// A demo instance bundled with a human-readable label, ready to hand to
/// [`crate::generate`].
pub struct DemoInstance {
    pub employees: Vec<Employee>,
    pub locations: Vec<Location>,
    pub shifts: Vec<ShiftTemplate>,
}

/// Generates a deterministic (seeded) demo instance for the given size.
pub fn generate(demo: DemoData) -> DemoInstance {
    let params = demo.parameters();
    let mut rng = StdRng::seed_from_u64(0);

    let locations: Vec<Location> = params
        .locations
        .iter()
        .enumerate()
        .map(|(i, (name, capacity))| {
            Location::new(format!("loc{i}"), *name)
                .with_required_skill(pick_required_skill(&params.required_skills, i))
                .with_capacity(*capacity)
        })
        .collect();

    let names = generate_name_permutations(&mut rng);
    let employees: Vec<Employee> = (0..params.employee_count)
        .map(|i| {
            let mut employee =
                Employee::new(format!("emp{i}"), &names[i % names.len()]).with_skill(
                    params.required_skills[i % params.required_skills.len()],
                );
            let optional_count = pick_count(&mut rng, &params.optional_skill_distribution);
            let mut optional: Vec<&str> = params.optional_skills.clone();
            optional.shuffle(&mut rng);
            for skill in optional.into_iter().take(optional_count) {
                employee = employee.with_skill(skill);
            }
            employee
        })
        .collect();

    let shifts = vec![
        ShiftTemplate::new(
            "morning",
            "Morning",
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        ),
        ShiftTemplate::new(
            "afternoon",
            "Afternoon",
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        ),
        ShiftTemplate::new(
            "evening",
            "Evening",
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        ),
    ];

    DemoInstance {
        employees,
        locations,
        shifts,
    }
}

fn pick_required_skill(required_skills: &[&'static str], location_index: usize) -> &'static str {
    required_skills[location_index % required_skills.len()]
}

/// Pick a count based on weighted distribution.
fn pick_count(rng: &mut StdRng, distribution: &[(usize, f64)]) -> usize {
    let total_weight: f64 = distribution.iter().map(|(_, w)| w).sum();
    let mut choice = rng.gen::<f64>() * total_weight;

    for (count, weight) in distribution {
        if choice < *weight {
            return *count;
        }
        choice -= weight;
    }
    distribution.last().map(|(c, _)| *c).unwrap_or(1)
}

const FIRST_NAMES: &[&str] = &[
    "Amy", "Beth", "Carl", "Dan", "Elsa", "Flo", "Gus", "Hugo", "Ivy", "Jay",
];
const LAST_NAMES: &[&str] = &[
    "Cole", "Fox", "Green", "Jones", "King", "Li", "Poe", "Rye", "Smith", "Watt",
];

fn generate_name_permutations(rng: &mut StdRng) -> Vec<String> {
    let mut names = Vec::with_capacity(FIRST_NAMES.len() * LAST_NAMES.len());
    for first in FIRST_NAMES {
        for last in LAST_NAMES {
            names.push(format!("{first} {last}"));
        }
    }
    names.shuffle(rng);
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_small() {
        let instance = generate(DemoData::Small);
        assert_eq!(instance.employees.len(), 15);
        assert_eq!(instance.locations.len(), 3);
        assert_eq!(instance.shifts.len(), 3);
    }

    #[test]
    fn test_generate_large() {
        let instance = generate(DemoData::Large);
        assert_eq!(instance.employees.len(), 50);
        assert_eq!(instance.locations.len(), 7);
    }

    #[test]
    fn test_employees_have_skills() {
        let instance = generate(DemoData::Small);
        for employee in &instance.employees {
            assert!(!employee.skills.is_empty(), "{} has no skills", employee.name);
        }
    }

    #[test]
    fn test_demo_data_from_str() {
        assert_eq!("SMALL".parse::<DemoData>(), Ok(DemoData::Small));
        assert_eq!("small".parse::<DemoData>(), Ok(DemoData::Small));
        assert_eq!("LARGE".parse::<DemoData>(), Ok(DemoData::Large));
        assert!("invalid".parse::<DemoData>().is_err());
    }

    #[test]
    fn test_medical_domain() {
        let instance = generate(DemoData::Small);
        let all_skills: std::collections::HashSet<_> = instance
            .employees
            .iter()
            .flat_map(|e| e.skills.iter())
            .collect();
        assert!(
            all_skills.iter().any(|s| *s == "Doctor" || *s == "Nurse"),
            "should have Doctor or Nurse skills"
        );
    }

    #[test]
    fn test_every_location_reachable_by_some_employee() {
        let instance = generate(DemoData::Small);
        for location in &instance.locations {
            assert!(
                instance
                    .employees
                    .iter()
                    .any(|e| crate::normalize::compatible(e, location)),
                "location {} is unreachable by every employee",
                location.name
            );
        }
    }
}
