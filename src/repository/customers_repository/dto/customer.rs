use crate::repository::customers_repository::entity::CustomerFindEntity;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: ObjectId,
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub member_number: Option<String>,
    pub address: Option<String>,
    pub branch: String,
    pub registered_by: Uuid,
    pub created_at: OffsetDateTime,
    pub is_active: bool,
}

impl From<CustomerFindEntity> for Customer {
    fn from(value: CustomerFindEntity) -> Self {
        Self {
            id: value._id,
            full_name: value.full_name,
            phone: value.phone,
            email: value.email,
            member_number: value.member_number,
            address: value.address,
            branch: value.branch,
            registered_by: value.registered_by.into(),
            created_at: value.created_at.into(),
            is_active: value.is_active,
        }
    }
}
