use crate::{auth::Role, domain::TicketRange, repository};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Role,
    pub branch: String,
    pub ticket_range: Option<TicketRange>,
    pub ticket_range_remaining: Option<i64>,
    pub failed_login_attempts: u32,
    pub is_locked: bool,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_login_at: Option<OffsetDateTime>,
}

impl From<repository::User> for User {
    fn from(value: repository::User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            full_name: value.full_name,
            email: value.email,
            phone: value.phone,
            role: value.role,
            branch: value.branch,
            ticket_range_remaining: value.ticket_range.map(|range| range.remaining()),
            ticket_range: value.ticket_range,
            failed_login_attempts: value.failed_login_attempts,
            is_locked: value.is_locked,
            is_active: value.is_active,
            created_at: value.created_at,
            last_login_at: value.last_login_at,
        }
    }
}
