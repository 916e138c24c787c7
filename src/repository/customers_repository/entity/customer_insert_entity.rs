use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct CustomerInsertEntity<'a> {
    pub full_name: &'a str,
    pub phone: &'a str,
    pub email: Option<&'a str>,
    pub member_number: Option<&'a str>,
    pub address: Option<&'a str>,
    pub branch: &'a str,

    pub registered_by: Uuid,
    pub created_at: DateTime,

    pub is_active: bool,
}
