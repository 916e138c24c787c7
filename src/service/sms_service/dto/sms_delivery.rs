use crate::domain::SmsStatus;

///
/// Outcome of single delivery attempt
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsDelivery {
    /// [SmsStatus::Sent] or [SmsStatus::Failed]
    pub status: SmsStatus,
    pub provider_response: Option<String>,
}
