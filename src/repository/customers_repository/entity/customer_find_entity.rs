use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CustomerFindEntity {
    pub _id: ObjectId,

    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub member_number: Option<String>,
    pub address: Option<String>,
    pub branch: String,

    pub registered_by: Uuid,
    pub created_at: DateTime,

    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}
