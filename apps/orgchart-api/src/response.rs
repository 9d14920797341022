//! Outcome encoding
//!
//! Every handler ends here. The status table is the same for both entities:
//!
//! | Operation | Success | Empty | Failure |
//! |---|---|---|---|
//! | List, Get | 200 + JSON | 204 | 500 + text |
//! | Create | 200 + JSON id | 202 | 500 + text |
//! | Update, Delete | 200 | 202 | 500 + text |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use orgchart_orchestrator::{OperationKind, OrchestrationError, Outcome};
use serde::Serialize;
use tracing::error;

/// Status reported when an operation completed without a value
pub fn empty_status(kind: OperationKind) -> StatusCode {
    match kind {
        OperationKind::List | OperationKind::Get => StatusCode::NO_CONTENT,
        OperationKind::Create | OperationKind::Update | OperationKind::Delete => {
            StatusCode::ACCEPTED
        }
    }
}

/// Encode an outcome whose success value is sent back as JSON
pub fn encode<T: Serialize>(kind: OperationKind, outcome: Outcome<T>) -> Response {
    match outcome {
        Outcome::Success(value) => (StatusCode::OK, Json(value)).into_response(),
        Outcome::Empty => empty_status(kind).into_response(),
        Outcome::Failure(err) => failure(kind, err),
    }
}

/// Encode an outcome that carries no body on success
pub fn acknowledge(kind: OperationKind, outcome: Outcome<()>) -> Response {
    match outcome {
        Outcome::Success(()) => StatusCode::OK.into_response(),
        Outcome::Empty => empty_status(kind).into_response(),
        Outcome::Failure(err) => failure(kind, err),
    }
}

fn failure(kind: OperationKind, err: OrchestrationError) -> Response {
    error!(
        operation = %kind,
        attempts = err.attempts(),
        error = %err,
        "Operation failed"
    );
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}
