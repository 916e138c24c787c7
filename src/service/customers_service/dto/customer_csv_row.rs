use crate::{repository::Customer, service::csv_export::format_datetime};
use serde::Serialize;

#[derive(Serialize)]
pub struct CustomerCsvRow {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub member_number: String,
    pub address: String,
    pub branch: String,
    pub is_active: bool,
    pub created_at: String,
}

impl From<Customer> for CustomerCsvRow {
    fn from(value: Customer) -> Self {
        Self {
            full_name: value.full_name,
            phone: value.phone,
            email: value.email.unwrap_or_default(),
            member_number: value.member_number.unwrap_or_default(),
            address: value.address.unwrap_or_default(),
            branch: value.branch,
            is_active: value.is_active,
            created_at: format_datetime(value.created_at),
        }
    }
}
