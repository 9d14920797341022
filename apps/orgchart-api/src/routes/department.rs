//! Department routes

use axum::{routing::get, Router};

use crate::{
    handlers::department::{
        create_department, delete_department, get_department, get_departments, update_department,
    },
    AppState,
};

/// Create department routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/department",
            get(get_departments)
                .post(create_department)
                .put(update_department),
        )
        .route(
            "/api/v1/department/:id",
            get(get_department).delete(delete_department),
        )
}
