use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};
use validator::ValidationErrors;

pub type Result<T> = core::result::Result<T, Error>;

/// Field name to the messages of every rule it broke.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug)]
pub enum Error {
    NotFound,
    InternalServerError,
    InvalidInput(FieldErrors),
    DatabaseError(sqlx::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Resource not found" }),
            ),
            Self::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
            Self::InvalidInput(fields) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid form input", "fields": fields }),
            ),
            Self::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Database error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("Database error: {:?}", err);
        Self::DatabaseError(err)
    }
}

impl From<ValidationErrors> for Error {
    fn from(errs: ValidationErrors) -> Self {
        let fields: FieldErrors = errs
            .field_errors()
            .into_iter()
            .map(|(field, rules)| {
                let messages = rules
                    .iter()
                    .map(|rule| match &rule.message {
                        Some(message) => message.to_string(),
                        None => rule.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        warn!(?fields, "Rejected form input");
        Self::InvalidInput(fields)
    }
}
