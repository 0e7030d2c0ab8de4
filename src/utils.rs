use std::sync::Arc;

use crate::config::AppConfig;
use crate::email::{EmailService, MailTransport};

pub mod error;

/// Builds the process-wide SMTP transport and probes the relay once.
///
/// A failed probe is logged and the server still starts; sends will fail until the relay is reachable.
pub async fn init_email_service(config: &AppConfig) -> anyhow::Result<Arc<EmailService>> {
  let email_service = Arc::new(EmailService::new(config.smtp.clone())?);

  match email_service.verify_connection().await {
    Ok(()) => tracing::info!("Email transporter is ready."),
    Err(e) => tracing::error!("Email transporter error: {:?}", e),
  }

  Ok(email_service)
}
