use async_trait::async_trait;
use std::error::Error;
use std::sync::Arc;

use crate::email::MailTransport;
use crate::impl_service_error_conversions;

use super::model::BookingRequest;
use super::template;

pub const VALIDATION_ERROR_MESSAGE: &str = "All fields are required.";
pub const SUCCESS_MESSAGE: &str = "Emails sent successfully!";

#[derive(Debug)]
pub enum BookingServiceError {
  ValidationError(String),
  MailDeliveryError(String),
}

impl Error for BookingServiceError {}

impl std::fmt::Display for BookingServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      BookingServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      BookingServiceError::MailDeliveryError(msg) => write!(f, "Mail Delivery Error: {}", msg),
    }
  }
}

impl_service_error_conversions!(BookingServiceError, MailDeliveryError);

#[async_trait]
pub trait BookingService: Send + Sync {
  /// Validates the booking and notifies both the customer and the administrator.
  async fn book(&self, req: BookingRequest) -> Result<(), BookingServiceError>;
}

pub struct BookingServiceImpl {
  transport: Arc<dyn MailTransport>,
  sender: String,
  admin_email: String,
}

impl BookingServiceImpl {
  pub fn new(transport: Arc<dyn MailTransport>, sender: impl Into<String>, admin_email: impl Into<String>) -> Self {
    Self {
      transport,
      sender: sender.into(),
      admin_email: admin_email.into(),
    }
  }
}

#[async_trait]
impl BookingService for BookingServiceImpl {
  async fn book(&self, req: BookingRequest) -> Result<(), BookingServiceError> {
    let booking = req.into_booking().map_err(|e| {
      tracing::warn!("Booking rejected: {}", e);
      BookingServiceError::ValidationError(VALIDATION_ERROR_MESSAGE.to_string())
    })?;

    let customer_message = template::customer_confirmation(&self.sender, &booking);
    let admin_message = template::admin_summary(&self.sender, &self.admin_email, &booking);

    // Both sends always run to completion, even when one of them fails early.
    let (customer_result, admin_result) = tokio::join!(
      self.transport.send(&customer_message),
      self.transport.send(&admin_message),
    );

    match customer_result.and(admin_result) {
      Ok(()) => {
        tracing::info!("Emails sent successfully.");
        Ok(())
      }
      Err(e) => {
        tracing::error!("Email error: {:?}", e);
        Err(e.into())
      }
    }
  }
}
