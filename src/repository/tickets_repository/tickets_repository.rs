use super::{AuditStatusUpdate, NewTicket, PaymentModeFix, Ticket, TicketQuery};
use crate::{
    domain::{AuditStatus, SmsStatus},
    dto::input,
    repository::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new Pending ticket with Pending SMS status
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when ticket number is already used
    ///
    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, Error>;

    ///
    /// Finds tickets sorted descending by creation date.
    /// Without pagination all matching tickets are returned.
    ///
    async fn find_many(
        &self,
        query: TicketQuery,
        pagination: Option<input::Pagination>,
    ) -> Result<Vec<Ticket>, Error>;

    ///
    /// Finds rendered receipt of the ticket
    ///
    async fn find_html(&self, id: ObjectId) -> Result<Option<String>, Error>;

    ///
    /// Updates audit fields only if ticket is still in `expected` status
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - ticket does not exist
    ///     - status is no longer `expected`
    ///
    async fn update_audit_status(
        &self,
        id: ObjectId,
        expected: AuditStatus,
        update: AuditStatusUpdate,
    ) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when ticket does not exist
    ///
    async fn update_sms_status(&self, id: ObjectId, sms_status: SmsStatus) -> Result<(), Error>;

    async fn count(&self, query: TicketQuery) -> Result<u64, Error>;

    ///
    /// Counts tickets with missing payment mode
    ///
    async fn count_missing_payment_mode(&self, query: TicketQuery) -> Result<u64, Error>;

    ///
    /// Sets payment mode of every ticket that has none.
    /// Tickets with bank receipt number become BANK, all others CASH.
    ///
    async fn fix_missing_payment_mode(&self) -> Result<PaymentModeFix, Error>;
}
