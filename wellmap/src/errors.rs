use crate::api::models::errors::ErrorResponse;
use crate::db::errors::DbError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Requested resource not found
    #[error("{resource} not found")]
    NotFound { resource: String, id: String },

    /// Generic internal service error
    #[error("Internal error: {operation}")]
    Internal { operation: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn well_not_found(id: impl ToString) -> Self {
        Error::NotFound {
            resource: "well".to_string(),
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Internal { .. } | Error::Database(_) | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message placed in the `error` field of the response body.
    ///
    /// Data-access failures surface their textual description; the source chain stays in the logs.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::NotFound { resource, id } => {
                tracing::debug!(%resource, %id, "Client error: {}", self);
            }
            Error::Internal { .. } | Error::Database(_) | Error::Other(_) => {
                // Recording as `dyn Error` lets the fmt layer print the source chain too
                tracing::error!(error = &self as &(dyn std::error::Error + 'static), "Internal service error");
            }
        }

        let status = self.status_code();
        let body = ErrorResponse { error: self.user_message() };
        (status, Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
