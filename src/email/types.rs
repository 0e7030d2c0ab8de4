#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
    }
  }
}

/// A single HTML email, addressed to exactly one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html: String,
}

impl EmailMessage {
  pub fn new(from: impl Into<String>, to: impl Into<String>, subject: impl Into<String>, html: String) -> Self {
    EmailMessage {
      from: from.into(),
      to: to.into(),
      subject: subject.into(),
      html,
    }
  }
}
