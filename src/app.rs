use axum::{extract::DefaultBodyLimit, http::Method, Router};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{domains::booking::rest::booking_routes, state::SharedAppState};

const BODY_LIMIT_BYTES: usize = 100 * 1024;

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .merge(booking_routes())
    .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_headers(Any)
    .allow_methods([
      Method::GET,
      Method::HEAD,
      Method::PUT,
      Method::PATCH,
      Method::POST,
      Method::DELETE,
    ])
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{header, Request, StatusCode},
  };
  use tower::ServiceExt;

  use crate::test_support::{app_with_transport, post_raw, RecordingTransport};

  #[tokio::test]
  async fn preflight_allows_any_origin() {
    let app = app_with_transport(Arc::new(RecordingTransport::default()));

    let request = Request::builder()
      .method("OPTIONS")
      .uri("/send-mail")
      .header(header::ORIGIN, "https://salon.example.com")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
      .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
      .body(Body::empty())
      .expect("build request");

    let response = app.oneshot(request).await.expect("handle request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
  }

  #[tokio::test]
  async fn oversized_body_is_rejected() {
    let transport = Arc::new(RecordingTransport::default());
    let app = app_with_transport(transport.clone());

    let body = format!("{{\"Name\": \"{}\"}}", "a".repeat(200 * 1024));
    let (status, _) = post_raw(app, "/send-mail", "application/json", &body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(transport.attempts(), 0);
  }

  #[tokio::test]
  async fn unknown_route_is_not_found() {
    let app = app_with_transport(Arc::new(RecordingTransport::default()));

    let request = Request::builder().uri("/").body(Body::empty()).expect("build request");
    let response = app.oneshot(request).await.expect("handle request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }
}
