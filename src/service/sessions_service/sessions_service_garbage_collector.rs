use super::{dto::Session, SessionsServiceConfig};
use std::{collections::HashMap, sync::Arc};
use time::OffsetDateTime;
use tokio::{
    sync::{Mutex, Notify},
    time::{interval, Interval, MissedTickBehavior},
};
use uuid::Uuid;

pub struct SessionsServiceGarbageCollector {
    config: SessionsServiceConfig,
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,

    interval: Interval,
}

impl SessionsServiceGarbageCollector {
    pub fn new(
        config: SessionsServiceConfig,
        sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    ) -> Self {
        let mut interval = interval(config.garbage_collector_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            config,
            sessions,
            interval,
        }
    }

    #[tracing::instrument(name = "Sessions Garbage Collector", skip_all)]
    pub async fn run(mut self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {},

            // Run infinite loop and remove expired sessions periodically
            _ = async { loop {
                self.interval.tick().await;
                self.collect().await;
            }} => {}
        }

        tracing::info!("garbage collector stopped");
    }

    async fn collect(&self) {
        tracing::debug!("garbage collection started");

        let now = OffsetDateTime::now_utc();
        let len_before;
        let len_after;
        {
            let mut sessions = self.sessions.lock().await;
            len_before = sessions.len();

            sessions.retain(|_, session| !session.is_expired(&self.config, now));
            len_after = sessions.len();

            if sessions.len() < sessions.capacity() / 4 {
                let new_capacity = sessions.capacity() / 2;
                sessions.shrink_to(new_capacity);
            }
        }

        let removed_sessions = len_before - len_after;
        tracing::debug!(removed_sessions, "garbage collection finished");
    }
}
