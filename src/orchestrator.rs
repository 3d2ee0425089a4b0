//! Component F — Orchestrator.
//!
//! Sequences Normalizer → Model Builder → Solver Driver → Extractor →
//! Statistics Engine, merges optional advisor overrides into the default
//! parameters, and assembles the result envelope.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::config::{AdvisorOverride, ScheduleParameters};
use crate::domain::{Assignment, Employee, Location, ShiftTemplate};
use crate::error::CoreError;
use crate::stats::Statistics;
use crate::{extract, model, normalize, solver};

/// The full result of a `generate` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub status: &'static str,
    pub solver_status: &'static str,
    pub generated_at: DateTime<Utc>,
    pub dates: Vec<NaiveDate>,
    pub employees: Vec<Employee>,
    pub locations: Vec<Location>,
    pub shifts: Vec<ShiftTemplate>,
    pub schedule: Vec<Assignment>,
    pub statistics: Statistics,
}

/// Runs the full pipeline for one schedule generation request.
///
/// `overrides`, if present, is merged into [`ScheduleParameters::default`]
/// before validation — only the documented subset of keys is honored.
#[tracing::instrument(skip(employees, locations, shifts, overrides))]
pub fn generate(
    employees: &[Employee],
    locations: &[Location],
    shifts: &[ShiftTemplate],
    overrides: Option<&AdvisorOverride>,
) -> Result<ResultEnvelope, CoreError> {
    let params = ScheduleParameters::default().merged_with(overrides);

    tracing::info!(
        employees = employees.len(),
        locations = locations.len(),
        shifts = shifts.len(),
        "normalizing schedule generation request"
    );
    let input = normalize::normalize(employees, locations, shifts, params)?;

    tracing::debug!("building CP-SAT model");
    let mut built = model::build(&input);

    let outcome = solver::solve(&mut built, &input, params.solve_time_limit_secs)?;
    tracing::info!(status = outcome.status.as_str(), "solve finished");

    let schedule = extract::extract(&input, &built, &outcome);
    let statistics = crate::stats::compute(&schedule, shifts.len());

    let status = match outcome.status {
        solver::SolverStatus::Optimal => "SUCCESS",
        solver::SolverStatus::Feasible => "FEASIBLE",
    };

    Ok(ResultEnvelope {
        status,
        solver_status: outcome.status.as_str(),
        generated_at: Utc::now(),
        dates: input.dates.clone(),
        employees: employees.to_vec(),
        locations: locations.to_vec(),
        shifts: shifts.to_vec(),
        schedule,
        statistics,
    })
}
