//! Notification bodies for a confirmed booking.
//!
//! Field values are inserted into the HTML as-is, without escaping.

use super::model::Booking;
use crate::email::EmailMessage;

pub const CUSTOMER_SUBJECT: &str = "Appointment Confirmation";
pub const ADMIN_SUBJECT: &str = "New Appointment Booking";
pub const CONFIRMATION_IMAGE_URL: &str =
  "https://lh3.googleusercontent.com/p/AF1QipNHwczy8exThH7v40O4KrD9j5CMXqidK6NZkcpG=s680-w680-h510";

pub fn customer_confirmation(sender: &str, booking: &Booking) -> EmailMessage {
  let html = format!(
    r#"<p>Dear {name},</p>
<p>Your appointment for <strong>{service}</strong> has been confirmed.</p>
<p><strong>Date:</strong> {date}</p>
<p><strong>Time:</strong> {time}</p>
<img src="{image}" alt="Appointment Confirmation" style="width:100%;max-width:600px;display:block;margin-top:10px;height:auto;">
<p>We look forward to seeing you!</p>"#,
    name = booking.name,
    service = booking.service,
    date = booking.date,
    time = booking.time,
    image = CONFIRMATION_IMAGE_URL,
  );

  EmailMessage::new(sender, booking.email.as_str(), CUSTOMER_SUBJECT, html)
}

pub fn admin_summary(sender: &str, admin_email: &str, booking: &Booking) -> EmailMessage {
  let html = format!(
    r#"<p>A new appointment has been booked:</p>
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Phone:</strong> {mobile}</p>
<p><strong>Date:</strong> {date}</p>
<p><strong>Time:</strong> {time}</p>
<p><strong>Service:</strong> {service}</p>"#,
    name = booking.name,
    email = booking.email,
    mobile = booking.mobile,
    date = booking.date,
    time = booking.time,
    service = booking.service,
  );

  EmailMessage::new(sender, admin_email, ADMIN_SUBJECT, html)
}
