use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::{ErrorCode, LedgerError};

/// Central error type for the gateway
///
/// Ledger errors carry their own stable code and message; everything else
/// collapses to `INTERNAL_ERROR` with the details kept out of the response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("An unexpected error occurred")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::Ledger(err) => {
                let code = err.code();
                let status = match code {
                    ErrorCode::InstrumentNotFound | ErrorCode::OrderNotFound => {
                        StatusCode::NOT_FOUND
                    }
                    ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
                    ErrorCode::InsufficientBalance | ErrorCode::InvalidOrderState => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, code)
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(code = code.as_str(), error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
