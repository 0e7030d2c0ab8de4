use std::sync::Arc;

use crate::config::AppConfig;
use crate::domains::booking::{
  model::BookingRequest,
  service::{BookingService, BookingServiceError, BookingServiceImpl},
};
use crate::email::MailTransport;

pub trait AppState: Clone + Send + Sync + 'static {
  fn book(&self, req: BookingRequest) -> impl std::future::Future<Output = Result<(), BookingServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub booking_service: Arc<dyn BookingService>,
}

impl SharedAppState {
  pub fn new(config: &AppConfig, transport: Arc<dyn MailTransport>) -> Self {
    let booking_service = Arc::new(BookingServiceImpl::new(transport, config.sender(), config.admin_email.as_str()));

    Self { booking_service }
  }
}

impl AppState for SharedAppState {
  async fn book(&self, req: BookingRequest) -> Result<(), BookingServiceError> {
    self.booking_service.book(req).await
  }
}
