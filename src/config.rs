//! Process configuration, read from the environment once at startup.

use std::{env, fmt};

use crate::email::SmtpConfig;

const DEFAULT_PORT: u16 = 5000;

/// Everything the server needs to run.
#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Mail account credentials. The username doubles as the sender address.
  pub smtp: SmtpConfig,
  /// Receives a summary of every booking.
  pub admin_email: String,
  pub port: u16,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
  Missing(Vec<&'static str>),
  InvalidPort { var: &'static str, value: String },
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Missing(vars) => write!(f, "Missing required environment variables: {}", vars.join(", ")),
      ConfigError::InvalidPort { var, value } => write!(f, "{} must be a valid port number, got {:?}", var, value),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  ///
  /// Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let email_user = get("EMAIL_USER");
    let email_pass = get("EMAIL_PASS");
    let admin_email = get("ADMIN_EMAIL");

    let (Some(email_user), Some(email_pass), Some(admin_email)) = (email_user, email_pass, admin_email) else {
      let missing = ["EMAIL_USER", "EMAIL_PASS", "ADMIN_EMAIL"]
        .into_iter()
        .filter(|key| get(*key).is_none())
        .collect();
      return Err(ConfigError::Missing(missing));
    };

    let defaults = SmtpConfig::default();
    let smtp = SmtpConfig {
      host: get("SMTP_HOST").unwrap_or(defaults.host),
      port: parse_port("SMTP_PORT", get("SMTP_PORT"), defaults.port)?,
      username: email_user,
      password: email_pass,
    };

    Ok(AppConfig {
      smtp,
      admin_email,
      port: parse_port("PORT", get("PORT"), DEFAULT_PORT)?,
    })
  }

  pub fn sender(&self) -> &str {
    &self.smtp.username
  }
}

fn parse_port(var: &'static str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
  match value {
    None => Ok(default),
    Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort { var, value }),
  }
}
