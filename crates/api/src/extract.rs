//! Request body extraction shared by every mutation endpoint.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// How a mutation was submitted. Decides how the write is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    /// `application/x-www-form-urlencoded`
    Form,
    /// `application/json`
    Json,
}

/// A mutation body accepted either as an HTML form or as JSON.
///
/// Malformed bodies (bad syntax, a non-numeric id, an unparseable date) are
/// rejected with `400 BAD_REQUEST` before any validation runs.
#[derive(Debug)]
pub struct Submission<T> {
    pub input: T,
    pub kind: SubmissionKind,
}

impl<S, T> FromRequest<S> for Submission<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(input) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            Ok(Self {
                input,
                kind: SubmissionKind::Form,
            })
        } else {
            let Json(input) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            Ok(Self {
                input,
                kind: SubmissionKind::Json,
            })
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}
