//! Email sending functionality module
//!
//! The rest of the crate only sees the [`MailTransport`] capability.
//! [`EmailService`] is the SMTP implementation built on lettre.

mod service;
mod types;

pub use service::{EmailService, MailTransport};
pub use types::{EmailMessage, SmtpConfig};
