use super::{entity::SmsLogEntity, NewSmsLog, SmsLog, SmsLogsRepository};
use crate::repository::Error;
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime};
use futures_util::TryStreamExt;
use mongodb::Database;

const SMS_LOGS: &str = "sms_logs";

pub struct SmsLogsRepositoryImpl {
    database: Database,
}

impl SmsLogsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl SmsLogsRepository for SmsLogsRepositoryImpl {
    async fn insert(&self, sms_log: NewSmsLog) -> Result<SmsLog, Error> {
        let entity = SmsLogEntity {
            _id: ObjectId::new(),
            ticket_id: sms_log.ticket_id,
            phone: sms_log.phone,
            message: sms_log.message,
            status: sms_log.status,
            provider_response: sms_log.provider_response,
            created_at: DateTime::from(sms_log.created_at),
        };

        self.database
            .collection::<SmsLogEntity>(SMS_LOGS)
            .insert_one(&entity)
            .await?;

        Ok(SmsLog::from(entity))
    }

    async fn find_many_by_ticket(&self, ticket_id: ObjectId) -> Result<Vec<SmsLog>, Error> {
        let sms_logs = self
            .database
            .collection::<SmsLogEntity>(SMS_LOGS)
            .find(doc! { "ticket_id": ticket_id })
            .sort(doc! { "created_at": 1 })
            .await?
            .map_ok(SmsLog::from)
            .try_collect()
            .await?;

        Ok(sms_logs)
    }
}
