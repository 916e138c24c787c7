use super::{NewSmsLog, SmsLog};
use crate::repository::Error;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsLogsRepository: Send + Sync {
    async fn insert(&self, sms_log: NewSmsLog) -> Result<SmsLog, Error>;

    ///
    /// Finds delivery attempts of the ticket, oldest first
    ///
    async fn find_many_by_ticket(&self, ticket_id: ObjectId) -> Result<Vec<SmsLog>, Error>;
}
