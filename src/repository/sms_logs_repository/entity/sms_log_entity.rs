use crate::domain::SmsStatus;
use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct SmsLogEntity {
    pub _id: ObjectId,
    pub ticket_id: Option<ObjectId>,
    pub phone: String,
    pub message: String,
    pub status: SmsStatus,
    pub provider_response: Option<String>,
    pub created_at: DateTime,
}
