use crate::email::types::{EmailMessage, SmtpConfig};
use anyhow::{bail, Result};
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

/// Outbound mail capability shared by every request.
#[async_trait]
pub trait MailTransport: Send + Sync {
  /// Checks that the relay accepts a connection with the configured credentials.
  async fn verify_connection(&self) -> Result<()>;

  async fn send(&self, message: &EmailMessage) -> Result<()>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }

  fn build_message(message: &EmailMessage) -> Result<Message> {
    let email = Message::builder()
      .from(message.from.parse()?)
      .to(message.to.parse()?)
      .subject(&message.subject)
      .header(ContentType::TEXT_HTML)
      .body(message.html.clone())?;

    Ok(email)
  }
}

#[async_trait]
impl MailTransport for EmailService {
  async fn verify_connection(&self) -> Result<()> {
    if !self.transporter.test_connection().await? {
      bail!("SMTP server {}:{} refused the connection", self.smtp_config.host, self.smtp_config.port);
    }

    Ok(())
  }

  async fn send(&self, message: &EmailMessage) -> Result<()> {
    let email = Self::build_message(message)?;
    self.transporter.send(email).await?;

    Ok(())
  }
}
