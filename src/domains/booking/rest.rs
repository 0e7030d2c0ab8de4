use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};
use serde::Serialize;

use super::{model::BookingRequest, service::SUCCESS_MESSAGE};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

pub fn booking_routes() -> Router<SharedAppState> {
  Router::new().route("/send-mail", post(send_mail_handler))
}

pub async fn send_mail_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<JsonResponse<MessageResponse>, AppError> {
  let Json(payload) = payload?;
  tracing::info!("Received request: {:?}", payload);

  state.book(payload).await?;

  Ok(JsonResponse(MessageResponse {
    message: SUCCESS_MESSAGE.to_string(),
  }))
}
