use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::booking::service::{BookingServiceError, VALIDATION_ERROR_MESSAGE};

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::warn!("Rejected booking payload: {}", rejection.body_text());
    match rejection.status() {
      StatusCode::PAYLOAD_TOO_LARGE => AppError::new(StatusCode::PAYLOAD_TOO_LARGE, rejection.body_text()),
      _ => AppError::bad_request(VALIDATION_ERROR_MESSAGE),
    }
  }
}

impl From<BookingServiceError> for AppError {
  fn from(error: BookingServiceError) -> Self {
    match error {
      BookingServiceError::ValidationError(msg) => AppError::bad_request(msg),
      BookingServiceError::MailDeliveryError(msg) => {
        AppError::internal_server_error(format!("Failed to send emails. {}", msg))
      }
    }
  }
}
