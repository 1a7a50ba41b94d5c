// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crew_leave::CoreError;
use crew_leave_domain::DomainError;
use crew_leave_persistence::PersistenceError;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error indicator.
    pub error: bool,
    /// Error message.
    pub message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error message.
    pub message: String,
}

impl HttpError {
    pub const fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    const fn not_found(message: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message,
        }
    }

    const fn conflict(message: String) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidTransition { .. } => {
                warn!(error = %err, "Transition rejected");
                Self::conflict(err.to_string())
            }
            CoreError::Validation(_)
            | CoreError::InsufficientData(_)
            | CoreError::DomainViolation(_) => Self::bad_request(err.to_string()),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Rejected(core) => core.into(),
            PersistenceError::PilotNotFound(_)
            | PersistenceError::RequestNotFound(_)
            | PersistenceError::EventNotFound(_)
            | PersistenceError::NotFound(_) => Self::not_found(err.to_string()),
            PersistenceError::PilotAlreadyExists(_) => Self::conflict(err.to_string()),
            _ => {
                error!(error = %err, "Persistence error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Persistence error: {err}"),
                }
            }
        }
    }
}
