//! Employee routes

use axum::{routing::get, Router};

use crate::{
    handlers::employee::{
        create_employee, delete_employee, get_employee, get_employees,
        get_employees_by_department, update_employee,
    },
    AppState,
};

/// Create employee routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/employee",
            get(get_employees)
                .post(create_employee)
                .put(update_employee),
        )
        .route(
            "/api/v1/employee/:id",
            get(get_employee).delete(delete_employee),
        )
        .route(
            "/api/v1/department/:id/employee",
            get(get_employees_by_department),
        )
}
