use super::SmsDelivery;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsService: Send + Sync {
    ///
    /// Sends message once. Failures are not retried,
    /// they are reported in returned [SmsDelivery].
    ///
    async fn send(&self, phone: &str, message: &str) -> SmsDelivery;
}
