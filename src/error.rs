/// Macro to generate the mail-layer `From` implementation for service errors
///
/// Usage:
/// ```ignore
/// impl_service_error_conversions!(BookingServiceError, MailDeliveryError);
/// ```
#[macro_export]
macro_rules! impl_service_error_conversions {
  ($error_type:ty, $delivery_variant:ident) => {
    impl From<anyhow::Error> for $error_type {
      fn from(err: anyhow::Error) -> Self {
        <$error_type>::$delivery_variant(err.to_string())
      }
    }
  };
}
