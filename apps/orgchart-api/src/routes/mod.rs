//! API routes

pub mod department;
pub mod employee;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tracing::error;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        department::{DepartmentRequest, DepartmentResponse},
        employee::{EmployeeRequest, EmployeeResponse},
    },
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::department::get_departments,
        handlers::department::get_department,
        handlers::department::create_department,
        handlers::department::update_department,
        handlers::department::delete_department,
        handlers::employee::get_employees,
        handlers::employee::get_employees_by_department,
        handlers::employee::get_employee,
        handlers::employee::create_employee,
        handlers::employee::update_employee,
        handlers::employee::delete_employee,
        health_handler,
        metrics_handler
    ),
    components(
        schemas(DepartmentRequest, DepartmentResponse, EmployeeRequest, EmployeeResponse)
    ),
    tags(
        (name = "department", description = "Manage the departments of the company"),
        (name = "employee", description = "Manage the employees of the company"),
        (name = "health", description = "Health check endpoints"),
        (name = "metrics", description = "Prometheus metrics")
    ),
    info(
        title = "OrgChart API",
        version = "0.1.0",
        description = "Department and employee management with timeout and retry on every call"
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(department::routes())
        .merge(employee::routes())
        .route("/health", axum::routing::get(health_handler))
        .route("/metrics", axum::routing::get(metrics_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}

/// Prometheus scrape endpoint
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Metrics in the Prometheus text format", body = String, content_type = "text/plain"),
        (status = 500, description = "Metrics could not be encoded", body = String, content_type = "text/plain")
    ),
    tag = "metrics"
)]
async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Ok(body) => ([(CONTENT_TYPE, state.metrics.content_type())], body).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
