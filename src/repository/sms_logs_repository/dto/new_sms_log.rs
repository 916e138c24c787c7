use crate::domain::SmsStatus;
use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct NewSmsLog {
    pub ticket_id: Option<ObjectId>,
    pub phone: String,
    pub message: String,
    pub status: SmsStatus,
    pub provider_response: Option<String>,
    pub created_at: OffsetDateTime,
}
