use crate::{auth::Role, domain::TicketRange};
use time::OffsetDateTime;

pub struct NewUser {
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub branch: String,
    pub ticket_range: Option<TicketRange>,
    pub created_at: OffsetDateTime,
}
