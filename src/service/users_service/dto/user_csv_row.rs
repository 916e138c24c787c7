use crate::{repository::User, service::csv_export::format_datetime};
use serde::Serialize;

#[derive(Serialize)]
pub struct UserCsvRow {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub branch: String,
    pub ticket_range_start: Option<i64>,
    pub ticket_range_end: Option<i64>,
    pub ticket_range_current: Option<i64>,
    pub is_locked: bool,
    pub is_active: bool,
    pub created_at: String,
    pub last_login_at: String,
}

impl From<User> for UserCsvRow {
    fn from(value: User) -> Self {
        Self {
            username: value.username,
            full_name: value.full_name,
            email: value.email.unwrap_or_default(),
            phone: value.phone.unwrap_or_default(),
            role: value.role.as_ref().to_string(),
            branch: value.branch,
            ticket_range_start: value.ticket_range.map(|range| range.start),
            ticket_range_end: value.ticket_range.map(|range| range.end),
            ticket_range_current: value.ticket_range.map(|range| range.current),
            is_locked: value.is_locked,
            is_active: value.is_active,
            created_at: format_datetime(value.created_at),
            last_login_at: value
                .last_login_at
                .map(format_datetime)
                .unwrap_or_default(),
        }
    }
}
