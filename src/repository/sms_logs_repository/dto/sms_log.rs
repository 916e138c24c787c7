use crate::{domain::SmsStatus, repository::sms_logs_repository::entity::SmsLogEntity};
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct SmsLog {
    pub id: ObjectId,
    pub ticket_id: Option<ObjectId>,
    pub phone: String,
    pub message: String,
    pub status: SmsStatus,
    pub provider_response: Option<String>,
    pub created_at: OffsetDateTime,
}

impl From<SmsLogEntity> for SmsLog {
    fn from(value: SmsLogEntity) -> Self {
        Self {
            id: value._id,
            ticket_id: value.ticket_id,
            phone: value.phone,
            message: value.message,
            status: value.status,
            provider_response: value.provider_response,
            created_at: value.created_at.into(),
        }
    }
}
