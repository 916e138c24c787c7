use crate::auth::Role;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: String,
    pub role: Role,
    pub branch: String,
    pub ticket_range: Option<TicketRangeAssignment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserUpdate {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Role,
    pub branch: String,
}

#[derive(Deserialize)]
pub struct UserPassword {
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserFilters {
    pub role: Option<Role>,
    pub branch: Option<String>,
    pub is_active: Option<bool>,
}

///
/// New range of the user. Without `current` numbering restarts at `start`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TicketRangeAssignment {
    pub start: i64,
    pub end: i64,
    pub current: Option<i64>,
}
