use crate::{auth::Role, domain::TicketRange};
use bson::{DateTime, Uuid};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct UserEntity {
    pub _id: Uuid,

    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub branch: String,

    pub ticket_range: Option<TicketRange>,

    pub failed_login_attempts: i32,
    pub is_locked: bool,
    pub is_active: bool,

    pub created_at: DateTime,
    pub last_login_at: Option<DateTime>,
}
