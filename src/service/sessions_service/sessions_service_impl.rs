use super::{
    dto::Session, SessionsService, SessionsServiceConfig, SessionsServiceGarbageCollector,
};
use crate::error::Error;
use axum::async_trait;
use std::{collections::HashMap, sync::Arc};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct SessionsServiceImpl {
    config: SessionsServiceConfig,
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionsServiceImpl {
    pub fn new(config: SessionsServiceConfig) -> Self {
        let sessions = HashMap::new();
        let sessions = Arc::new(Mutex::new(sessions));

        Self { config, sessions }
    }

    pub fn garbage_collector(&self) -> SessionsServiceGarbageCollector {
        SessionsServiceGarbageCollector::new(self.config, self.sessions.clone())
    }
}

#[async_trait]
impl SessionsService for SessionsServiceImpl {
    async fn create(&self, user_id: Uuid) -> Uuid {
        let session_id = Uuid::new_v4();
        let session = Session::new(user_id, OffsetDateTime::now_utc());

        self.sessions.lock().await.insert(session_id, session);
        tracing::debug!(%session_id, "created session");

        session_id
    }

    #[tracing::instrument(name = "Session", skip_all, fields(%session_id))]
    async fn touch(&self, session_id: Uuid, user_id: Uuid) -> Result<(), Error> {
        let now = OffsetDateTime::now_utc();
        let mut sessions = self.sessions.lock().await;

        let session = match sessions.get_mut(&session_id) {
            Some(session) if session.user_id == user_id => session,
            _ => {
                tracing::debug!("session not found");
                return Err(Error::SessionExpired);
            }
        };

        if session.is_expired(&self.config, now) {
            sessions.remove(&session_id);
            tracing::info!("session expired");
            return Err(Error::SessionExpired);
        }

        session.last_activity_at = now;
        tracing::trace!("session touched");

        Ok(())
    }

    async fn remove(&self, session_id: Uuid) {
        let removed = self.sessions.lock().await.remove(&session_id);
        tracing::debug!(%session_id, removed = removed.is_some(), "removed session");
    }

    async fn remove_user_sessions(&self, user_id: Uuid) {
        let mut sessions = self.sessions.lock().await;
        let len_before = sessions.len();
        sessions.retain(|_, session| session.user_id != user_id);

        let removed_sessions = len_before - sessions.len();
        tracing::debug!(%user_id, removed_sessions, "removed user sessions");
    }
}
