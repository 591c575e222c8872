//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure answers `{"success": false, "error": <status>, "message": ...}`
//! with a fixed message per status. The variant's detail only goes to the log.

use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("method not allowed")]
  MethodNotAllowed,

  #[error("unprocessable: {0}")]
  Unprocessable(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(e))
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// The client-facing message for this error's status.
  pub fn message(&self) -> &'static str {
    match self {
      ApiError::BadRequest(_) => "bad request",
      ApiError::NotFound(_) => "resource not found",
      ApiError::MethodNotAllowed => "method not allowed",
      ApiError::Unprocessable(_) => "unprocessable",
      ApiError::Store(_) => "internal server error",
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    } else {
      tracing::debug!(error = %self, "request rejected");
    }
    let body = json!({
      "success": false,
      "error":   status.as_u16(),
      "message": self.message(),
    });
    (status, Json(body)).into_response()
  }
}

impl From<trivia_core::Error> for ApiError {
  fn from(e: trivia_core::Error) -> Self { ApiError::Unprocessable(e.to_string()) }
}

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

impl From<QueryRejection> for ApiError {
  fn from(r: QueryRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

/// Router fallback for unknown paths.
pub async fn not_found() -> ApiError {
  ApiError::NotFound("no such route".to_owned())
}

/// Router fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError { ApiError::MethodNotAllowed }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn each_variant_has_a_fixed_status_and_message() {
    let cases = [
      (ApiError::BadRequest("x".into()), 400, "bad request"),
      (ApiError::NotFound("x".into()), 404, "resource not found"),
      (ApiError::MethodNotAllowed, 405, "method not allowed"),
      (ApiError::Unprocessable("x".into()), 422, "unprocessable"),
      (
        ApiError::store(std::io::Error::other("disk on fire")),
        500,
        "internal server error",
      ),
    ];
    for (err, status, message) in cases {
      assert_eq!(err.status().as_u16(), status);
      assert_eq!(err.message(), message);
    }
  }

  #[test]
  fn validation_errors_are_unprocessable() {
    let err = ApiError::from(trivia_core::Error::EmptyField("answer"));
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
  }
}
