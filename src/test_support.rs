use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  domains::booking::model::BookingRequest,
  email::{EmailMessage, MailTransport, SmtpConfig},
  state::SharedAppState,
};

pub const SENDER: &str = "salon@example.com";
pub const ADMIN_EMAIL: &str = "owner@example.com";

/// Records every message it is asked to send; optionally fails for one recipient.
#[derive(Default)]
pub struct RecordingTransport {
  sent: Mutex<Vec<EmailMessage>>,
  attempts: AtomicUsize,
  fail_for: Option<(String, String)>,
}

impl RecordingTransport {
  pub fn failing_for(recipient: &str, error: &str) -> Self {
    Self {
      fail_for: Some((recipient.to_string(), error.to_string())),
      ..Self::default()
    }
  }

  pub fn sent(&self) -> Vec<EmailMessage> {
    self.sent.lock().unwrap().clone()
  }

  pub fn attempts(&self) -> usize {
    self.attempts.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl MailTransport for RecordingTransport {
  async fn verify_connection(&self) -> anyhow::Result<()> {
    Ok(())
  }

  async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    tokio::task::yield_now().await;

    if let Some((recipient, error)) = &self.fail_for {
      if recipient == &message.to {
        anyhow::bail!("{}", error);
      }
    }

    self.sent.lock().unwrap().push(message.clone());
    Ok(())
  }
}

pub fn test_config() -> AppConfig {
  AppConfig {
    smtp: SmtpConfig {
      username: SENDER.to_string(),
      password: "secret".to_string(),
      ..SmtpConfig::default()
    },
    admin_email: ADMIN_EMAIL.to_string(),
    port: 5000,
  }
}

pub fn full_booking_request() -> BookingRequest {
  BookingRequest {
    name: Some("Jane".to_string()),
    email: Some("jane@x.com".to_string()),
    mobile: Some("555".to_string()),
    date: Some("2024-05-01".to_string()),
    time: Some("10:00".to_string()),
    service: Some("Haircut".to_string()),
  }
}

pub fn app_with_transport(transport: Arc<RecordingTransport>) -> Router {
  let state = SharedAppState::new(&test_config(), transport);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_string(body).expect("serialize request body");
  post_raw(app, uri, "application/json", &body).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", content_type)
    .body(Body::from(body.to_string()))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
