//! Thin REST boundary over the core.
//!
//! The HTTP surface is explicitly out of scope for the core's specification
//! — this module exists only so the crate is a runnable program. It has no
//! job tracking, no background solve actor, no constraint-analysis
//! endpoint: those belonged to the teacher's incremental local-search
//! engine and have no counterpart in a single-shot CP model. A request
//! either returns a finished envelope or an error; there is nothing to poll.

use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::config::AdvisorOverride;
use crate::demo_data::{self, DemoData};
use crate::domain::{Employee, Location, ShiftTemplate};
use crate::error::CoreError;
use crate::orchestrator::ResultEnvelope;

/// Creates the API router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/demo-data", get(list_demo_data))
        .route("/demo-data/{id}", get(get_demo_data))
        .route("/generate", post(generate_schedule))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub solver_engine: &'static str,
}

async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "shift-scheduling",
        version: env!("CARGO_PKG_VERSION"),
        solver_engine: "CP-SAT",
    })
}

/// GET /demo-data - list available demo data set names.
async fn list_demo_data() -> Json<Vec<&'static str>> {
    Json(demo_data::list_demo_data())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoDataResponse {
    pub employees: Vec<Employee>,
    pub locations: Vec<Location>,
    pub shifts: Vec<ShiftTemplate>,
}

/// GET /demo-data/{id} - a specific demo instance, ready to feed to /generate.
async fn get_demo_data(Path(id): Path<String>) -> Result<Json<DemoDataResponse>, StatusCode> {
    match id.parse::<DemoData>() {
        Ok(demo) => {
            let instance = demo_data::generate(demo);
            Ok(Json(DemoDataResponse {
                employees: instance.employees,
                locations: instance.locations,
                shifts: instance.shifts,
            }))
        }
        Err(_) => Err(StatusCode::NOT_FOUND),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub employees: Vec<Employee>,
    pub locations: Vec<Location>,
    pub shifts: Vec<ShiftTemplate>,
    #[serde(default)]
    pub overrides: Option<AdvisorOverride>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub kind: &'static str,
    pub message: String,
}

impl From<&CoreError> for ErrorResponse {
    fn from(err: &CoreError) -> Self {
        let kind = match err {
            CoreError::InvalidInput { .. } => "InvalidInput",
            CoreError::InfeasibleModel { .. } => "InfeasibleModel",
            CoreError::SolverTimeout { .. } => "SolverTimeout",
            CoreError::SolverInternal { .. } => "SolverInternal",
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

fn status_code_for(err: &CoreError) -> StatusCode {
    match err {
        CoreError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::InfeasibleModel { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::SolverTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        CoreError::SolverInternal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// POST /generate - run the full pipeline synchronously and return the
/// result envelope, or a structured error.
async fn generate_schedule(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<ResultEnvelope>, (StatusCode, Json<ErrorResponse>)> {
    crate::orchestrator::generate(
        &req.employees,
        &req.locations,
        &req.shifts,
        req.overrides.as_ref(),
    )
    .map(Json)
    .map_err(|err| (status_code_for(&err), Json(ErrorResponse::from(&err))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_kinds_match_taxonomy() {
        let err = CoreError::InvalidInput {
            field: "employees".into(),
            reason: "empty".into(),
        };
        assert_eq!(ErrorResponse::from(&err).kind, "InvalidInput");
    }
}
