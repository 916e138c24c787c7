use crate::{domain::SmsStatus, repository};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct SmsLog {
    pub id: String,
    pub ticket_id: Option<String>,
    pub phone: String,
    pub message: String,
    pub status: SmsStatus,
    pub provider_response: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<repository::SmsLog> for SmsLog {
    fn from(value: repository::SmsLog) -> Self {
        Self {
            id: value.id.to_hex(),
            ticket_id: value.ticket_id.map(|id| id.to_hex()),
            phone: value.phone,
            message: value.message,
            status: value.status,
            provider_response: value.provider_response,
            created_at: value.created_at,
        }
    }
}
