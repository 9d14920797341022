//! Department handlers

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use orgchart_domain::{Department, DepartmentId};
use orgchart_orchestrator::{OperationKind, Outcome};
use tracing::{info, instrument};

use crate::{
    dto::department::{DepartmentRequest, DepartmentResponse},
    response, AppState,
};

/// List every department
#[utoipa::path(
    get,
    path = "/api/v1/department",
    responses(
        (status = 200, description = "Get all the departments", body = [DepartmentResponse]),
        (status = 204, description = "No departments"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "department"
)]
#[instrument(name = "getDepartments", skip_all)]
pub async fn get_departments(State(state): State<AppState>) -> impl IntoResponse {
    info!(operation = "getDepartments", "Listing departments");

    let call = state
        .orchestrator
        .list("getDepartments", || state.departments.list_departments());
    let outcome = state.metrics.track("getDepartments", call).await;

    response::encode(OperationKind::List, outcome.map(into_responses))
}

/// Get a department by identifier
#[utoipa::path(
    get,
    path = "/api/v1/department/{id}",
    params(("id" = i64, Path, description = "Department identifier")),
    responses(
        (status = 200, description = "Get a department by ID", body = DepartmentResponse),
        (status = 204, description = "No department for the given ID"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "department"
)]
#[instrument(name = "getDepartment", skip_all)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!(operation = "getDepartment", id, "Fetching department");
    let id = DepartmentId::new(id);

    let call = state
        .orchestrator
        .get("getDepartment", || state.departments.get_department(id));
    let outcome = state.metrics.track("getDepartment", call).await;

    response::encode(OperationKind::Get, outcome.map(DepartmentResponse::from))
}

/// Create a department and return its identifier
#[utoipa::path(
    post,
    path = "/api/v1/department",
    request_body = DepartmentRequest,
    responses(
        (status = 200, description = "Department created", body = i64),
        (status = 202, description = "Department could not be created"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "department"
)]
#[instrument(name = "saveDepartment", skip_all)]
pub async fn create_department(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentRequest>,
) -> impl IntoResponse {
    info!(operation = "saveDepartment", name = %payload.name, "Creating department");

    let call = state
        .orchestrator
        .create("saveDepartment", || state.departments.create_department(&payload.name));
    let outcome = state.metrics.track("saveDepartment", call).await;

    response::encode(OperationKind::Create, outcome)
}

/// Rename a department
#[utoipa::path(
    put,
    path = "/api/v1/department",
    request_body = DepartmentRequest,
    responses(
        (status = 200, description = "Department updated"),
        (status = 202, description = "Department could not be updated"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "department"
)]
#[instrument(name = "updateDepartment", skip_all)]
pub async fn update_department(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentRequest>,
) -> impl IntoResponse {
    info!(
        operation = "updateDepartment",
        id = ?payload.id,
        name = %payload.name,
        "Updating department"
    );

    let call = async {
        // Without an id there is nothing to update
        let Some(id) = payload.id.map(DepartmentId::new) else {
            return Outcome::Empty;
        };

        state
            .orchestrator
            .update("updateDepartment", || state.departments.update_department(id, &payload.name))
            .await
    };
    let outcome = state.metrics.track("updateDepartment", call).await;

    response::acknowledge(OperationKind::Update, outcome)
}

/// Delete a department, unassigning its employees first
#[utoipa::path(
    delete,
    path = "/api/v1/department/{id}",
    params(("id" = i64, Path, description = "Department identifier")),
    responses(
        (status = 200, description = "Department deleted"),
        (status = 202, description = "Department could not be deleted"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "department"
)]
#[instrument(name = "deleteDepartment", skip_all)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!(operation = "deleteDepartment", id, "Deleting department");
    let id = DepartmentId::new(id);

    let call = state
        .orchestrator
        .delete("deleteDepartment", || state.departments.delete_department(id));
    let outcome = state.metrics.track("deleteDepartment", call).await;

    response::acknowledge(OperationKind::Delete, outcome)
}

fn into_responses(departments: Vec<Department>) -> Vec<DepartmentResponse> {
    departments
        .into_iter()
        .map(DepartmentResponse::from)
        .collect()
}
