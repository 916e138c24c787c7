use super::SessionsServiceConfig;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
    pub last_activity_at: OffsetDateTime,
}

impl Session {
    pub fn new(user_id: Uuid, now: OffsetDateTime) -> Self {
        Self {
            user_id,
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn is_expired(&self, config: &SessionsServiceConfig, now: OffsetDateTime) -> bool {
        self.last_activity_at + config.inactivity_timeout < now
            || self.created_at + config.max_lifetime < now
    }
}
