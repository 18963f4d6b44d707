//! Handlers for the question endpoints.
#![allow(
    clippy::unused_async,
    reason = "Unused asyncs are the norm in Actix route definition files"
)]
use actix_web::{web, HttpResponse};
use url::Url;

use crate::{
    db::models::question::{Manager as _, NewQuestion},
    server::errors::HttpError,
};

use super::state::{App as AppState, Global as _};

/// Index route, doubles as a health probe.
pub async fn index() -> &'static str {
    "Welcome to Recapp"
}

/// Handler for listing all stored questions.
///
/// Zero stored questions is an empty array, not an error.
///
/// # Errors
/// Returns a 500 response if the datastore query fails.
#[tracing::instrument(skip(data))]
pub async fn list(data: web::Data<AppState>) -> Result<HttpResponse, HttpError> {
    let questions = data
        .db()
        .find_all_questions()
        .await
        .map_err(HttpError::Datastore)?;
    Ok(HttpResponse::Ok().json(questions))
}

/// Handler for the names-only projection of the stored questions.
///
/// # Errors
/// Returns a 500 response if the datastore query fails.
#[tracing::instrument(skip(data))]
pub async fn names(data: web::Data<AppState>) -> Result<HttpResponse, HttpError> {
    let names = data
        .db()
        .find_all_question_names()
        .await
        .map_err(HttpError::Datastore)?;
    Ok(HttpResponse::Ok().json(names))
}

/// Handler for submitting a new question.
///
/// # Errors
/// Returns a 422 response naming the offending field if validation fails,
/// or a 500 response if the datastore refuses the insert.
#[tracing::instrument(skip(data, body))]
pub async fn create(
    data: web::Data<AppState>,
    body: web::Json<NewQuestion>,
) -> Result<HttpResponse, HttpError> {
    let question = validate(body.into_inner())?;
    let stored = data
        .db()
        .create_question(&question)
        .await
        .map_err(HttpError::Datastore)?;
    tracing::info!(id = stored.id, "Stored question from '{}'", stored.name);
    Ok(HttpResponse::Created().json(stored))
}

/// Check a submitted question at the API boundary and normalize it into
/// its stored form. All four fields are required and non-empty after
/// trimming; the two links must be absolute http(s) URLs.
///
/// # Errors
/// Errors with the name of the first offending field.
fn validate(payload: NewQuestion) -> Result<NewQuestion, HttpError> {
    let name = required("name", &payload.name)?;
    let text = required("text", &payload.text)?;
    let repo = link("repo", &payload.repo)?;
    let live = link("live", &payload.live)?;
    Ok(NewQuestion {
        name,
        text,
        repo,
        live,
    })
}

/// Trim a required field, rejecting blank values.
fn required(field: &'static str, value: &str) -> Result<String, HttpError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HttpError::Validation {
            field,
            message: "must not be empty".into(),
        });
    }
    Ok(trimmed.to_owned())
}

/// Trim a link field and insist on an absolute http(s) URL.
fn link(field: &'static str, value: &str) -> Result<String, HttpError> {
    let trimmed = required(field, value)?;
    let parsed = Url::parse(&trimmed).map_err(|_err| HttpError::Validation {
        field,
        message: "must be an absolute http(s) URL".into(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(HttpError::Validation {
            field,
            message: "must be an absolute http(s) URL".into(),
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod test {
    use super::validate;
    use crate::db::models::question::NewQuestion;
    use crate::server::errors::HttpError;

    fn payload() -> NewQuestion {
        NewQuestion {
            name: "Ada".into(),
            text: "hi".into(),
            repo: "http://x".into(),
            live: "http://y".into(),
        }
    }

    #[test]
    fn test_validate_when_all_fields_present_expect_trimmed_payload() {
        let mut cut = payload();
        cut.name = "  Ada ".into();
        let actual = validate(cut).unwrap().name;
        let expected = String::from("Ada");
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_validate_when_blank_text_expect_text_field_named() {
        let mut cut = payload();
        cut.text = "   ".into();
        let Err(HttpError::Validation { field, .. }) = validate(cut) else {
            panic!("expected a validation error");
        };
        assert_eq!("text", field);
    }

    #[test]
    fn test_validate_when_relative_repo_url_expect_repo_field_named() {
        let mut cut = payload();
        cut.repo = "not-a-url".into();
        let Err(HttpError::Validation { field, .. }) = validate(cut) else {
            panic!("expected a validation error");
        };
        assert_eq!("repo", field);
    }

    #[test]
    fn test_validate_when_ftp_live_url_expect_live_field_named() {
        let mut cut = payload();
        cut.live = "ftp://y".into();
        let Err(HttpError::Validation { field, .. }) = validate(cut) else {
            panic!("expected a validation error");
        };
        assert_eq!("live", field);
    }
}
