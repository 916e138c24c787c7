use crate::repository::users_repository::entity::UserEntity;
use crate::{auth::Role, domain::TicketRange};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub branch: String,
    pub ticket_range: Option<TicketRange>,
    pub failed_login_attempts: u32,
    pub is_locked: bool,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub last_login_at: Option<OffsetDateTime>,
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value._id.into(),
            username: value.username,
            full_name: value.full_name,
            email: value.email,
            phone: value.phone,
            password_hash: value.password_hash,
            role: value.role,
            branch: value.branch,
            ticket_range: value.ticket_range,
            failed_login_attempts: value.failed_login_attempts.max(0) as u32,
            is_locked: value.is_locked,
            is_active: value.is_active,
            created_at: value.created_at.into(),
            last_login_at: value.last_login_at.map(OffsetDateTime::from),
        }
    }
}
