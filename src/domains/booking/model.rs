use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Booking payload as posted by the booking form.
///
/// Every field is optional at the wire level so that absent fields reach validation instead of failing
/// deserialization. Values are never trimmed or checked for format.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequest {
  #[serde(rename = "Name", default)]
  #[validate(required, length(min = 1))]
  pub name: Option<String>,
  #[serde(rename = "Email", default)]
  #[validate(required, length(min = 1))]
  pub email: Option<String>,
  #[serde(rename = "Mobile", default)]
  #[validate(required, length(min = 1))]
  pub mobile: Option<String>,
  #[serde(rename = "Date", default)]
  #[validate(required, length(min = 1))]
  pub date: Option<String>,
  #[serde(rename = "Time", default)]
  #[validate(required, length(min = 1))]
  pub time: Option<String>,
  #[serde(rename = "Service", default)]
  #[validate(required, length(min = 1))]
  pub service: Option<String>,
}

/// A booking whose six fields are all present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
  pub name: String,
  pub email: String,
  pub mobile: String,
  pub date: String,
  pub time: String,
  pub service: String,
}

impl BookingRequest {
  pub fn into_booking(self) -> Result<Booking, ValidationErrors> {
    self.validate()?;

    let (Some(name), Some(email), Some(mobile), Some(date), Some(time), Some(service)) =
      (self.name, self.email, self.mobile, self.date, self.time, self.service)
    else {
      return Err(ValidationErrors::new());
    };

    Ok(Booking {
      name,
      email,
      mobile,
      date,
      time,
      service,
    })
  }
}
