//! Error responses for the question API.
//!
//! Exactly two kinds of failure cross the HTTP boundary: the datastore
//! refused a query, or a submitted body failed validation. Datastore
//! details are logged server-side and never serialized to the client;
//! 404 is reserved for missing specific resources.
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde_json::json;

/// Errors surfaced to API clients.
#[derive(Debug, Display)]
pub enum HttpError {
    /// The datastore failed to execute a query.
    #[display(fmt = "datastore query failed")]
    Datastore(anyhow::Error),
    /// A submitted field failed validation.
    #[display(fmt = "invalid value for field '{}': {}", field, message)]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable reason.
        message: String,
    },
}

impl ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::Datastore(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match *self {
            Self::Datastore(ref err) => {
                tracing::error!("Datastore error: {err:?}");
                json!({ "error": self.to_string() })
            }
            Self::Validation { field, ref message } => {
                json!({ "error": message, "field": field })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
