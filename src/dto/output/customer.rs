use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Customer {
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub member_number: Option<String>,
    pub address: Option<String>,
    pub branch: String,
    pub registered_by: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub is_active: bool,
}

impl From<repository::Customer> for Customer {
    fn from(value: repository::Customer) -> Self {
        Self {
            id: value.id.to_hex(),
            full_name: value.full_name,
            phone: value.phone,
            email: value.email,
            member_number: value.member_number,
            address: value.address,
            branch: value.branch,
            registered_by: value.registered_by,
            created_at: value.created_at,
            is_active: value.is_active,
        }
    }
}
