use time::OffsetDateTime;
use uuid::Uuid;

pub struct NewCustomer {
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub member_number: Option<String>,
    pub address: Option<String>,
    pub branch: String,
    pub registered_by: Uuid,
    pub created_at: OffsetDateTime,
}
