//! Employee handlers

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use orgchart_domain::{DepartmentId, Employee, EmployeeId};
use orgchart_orchestrator::{OperationKind, Outcome};
use tracing::{info, instrument};

use crate::{
    dto::employee::{EmployeeRequest, EmployeeResponse},
    response, AppState,
};

/// List every employee
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    responses(
        (status = 200, description = "Get all the employees", body = [EmployeeResponse]),
        (status = 204, description = "No employees"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "employee"
)]
#[instrument(name = "getEmployees", skip_all)]
pub async fn get_employees(State(state): State<AppState>) -> impl IntoResponse {
    info!(operation = "getEmployees", "Listing employees");

    let call = state
        .orchestrator
        .list("getEmployees", || state.employees.list_employees());
    let outcome = state.metrics.track("getEmployees", call).await;

    response::encode(OperationKind::List, outcome.map(into_responses))
}

/// List the employees of one department
#[utoipa::path(
    get,
    path = "/api/v1/department/{id}/employee",
    params(("id" = i64, Path, description = "Department identifier")),
    responses(
        (status = 200, description = "Get the employees of a department", body = [EmployeeResponse]),
        (status = 204, description = "No employees in the department"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "employee"
)]
#[instrument(name = "getEmployeesByDept", skip_all)]
pub async fn get_employees_by_department(
    State(state): State<AppState>,
    Path(dept_id): Path<i64>,
) -> impl IntoResponse {
    info!(
        operation = "getEmployeesByDept",
        dept_id,
        "Listing employees of department"
    );
    let dept_id = DepartmentId::new(dept_id);

    let call = state
        .orchestrator
        .list("getEmployeesByDept", || state.employees.list_employees_by_department(dept_id));
    let outcome = state.metrics.track("getEmployeesByDept", call).await;

    response::encode(OperationKind::List, outcome.map(into_responses))
}

/// Get an employee by identifier
#[utoipa::path(
    get,
    path = "/api/v1/employee/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Get an employee by ID", body = EmployeeResponse),
        (status = 204, description = "No employee for the given ID"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "employee"
)]
#[instrument(name = "getEmployee", skip_all)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!(operation = "getEmployee", id, "Fetching employee");
    let id = EmployeeId::new(id);

    let call = state
        .orchestrator
        .get("getEmployee", || state.employees.get_employee(id));
    let outcome = state.metrics.track("getEmployee", call).await;

    response::encode(OperationKind::Get, outcome.map(EmployeeResponse::from))
}

/// Create an employee and return its identifier
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee created", body = i64),
        (status = 202, description = "Employee could not be created"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "employee"
)]
#[instrument(name = "saveEmployee", skip_all)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> impl IntoResponse {
    info!(
        operation = "saveEmployee",
        name = %payload.name,
        dept_id = ?payload.dept_id,
        "Creating employee"
    );
    let dept_id = payload.dept_id.map(DepartmentId::new);

    let call = state
        .orchestrator
        .create("saveEmployee", || state.employees.create_employee(&payload.name, dept_id));
    let outcome = state.metrics.track("saveEmployee", call).await;

    response::encode(OperationKind::Create, outcome)
}

/// Replace an employee's name and department
#[utoipa::path(
    put,
    path = "/api/v1/employee",
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated"),
        (status = 202, description = "Employee could not be updated"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "employee"
)]
#[instrument(name = "updateEmployee", skip_all)]
pub async fn update_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> impl IntoResponse {
    info!(
        operation = "updateEmployee",
        id = ?payload.id,
        name = %payload.name,
        dept_id = ?payload.dept_id,
        "Updating employee"
    );

    let call = async {
        let Some(id) = payload.id.map(EmployeeId::new) else {
            return Outcome::Empty;
        };
        let dept_id = payload.dept_id.map(DepartmentId::new);

        state
            .orchestrator
            .update("updateEmployee", || {
                state.employees.update_employee(id, &payload.name, dept_id)
            })
            .await
    };
    let outcome = state.metrics.track("updateEmployee", call).await;

    response::acknowledge(OperationKind::Update, outcome)
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/v1/employee/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 202, description = "Employee could not be deleted"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    ),
    tag = "employee"
)]
#[instrument(name = "deleteEmployee", skip_all)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!(operation = "deleteEmployee", id, "Deleting employee");
    let id = EmployeeId::new(id);

    let call = state
        .orchestrator
        .delete("deleteEmployee", || state.employees.delete_employee(id));
    let outcome = state.metrics.track("deleteEmployee", call).await;

    response::acknowledge(OperationKind::Delete, outcome)
}

fn into_responses(employees: Vec<Employee>) -> Vec<EmployeeResponse> {
    employees.into_iter().map(EmployeeResponse::from).collect()
}
