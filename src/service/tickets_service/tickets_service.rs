use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

///
/// Sales users only ever see tickets they issued.
/// Tickets of other users are reported as not existing.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Issues ticket with next number from range of the user,
    /// stores rendered receipt and notifies customer by SMS.
    ///
    /// ### Errors
    /// - [Error::Auth] when user is not sales
    /// - [Error::Amount] when amount is not positive, above the limit or finer than cents
    /// - [Error::Validation] when
    ///     - customer id is malformed
    ///     - bank payment has no bank receipt number
    /// - [Error::CustomerNotExist] when customer does not exist or is deactivated
    /// - [Error::TicketRangeExceeded] when range of the user is used up
    /// - [Error::TicketNumberContention] when number could not be reserved
    /// - [Error::TicketNumberTaken] when number was already used by another ticket
    ///
    async fn issue(&self, user: &User, ticket: input::TicketCreate)
        -> Result<output::Ticket, Error>;

    ///
    /// ### Errors
    /// - [Error::TicketNotExist]
    ///
    async fn find(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error>;

    async fn find_many(
        &self,
        user: &User,
        filters: input::TicketFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error>;

    async fn export_csv(
        &self,
        user: &User,
        filters: input::TicketFilters,
    ) -> Result<output::CsvExport, Error>;

    ///
    /// ### Errors
    /// - [Error::Auth] when user is not an auditor
    /// - [Error::TicketNotExist]
    /// - [Error::InvalidTransition] when ticket is not Pending
    /// - [Error::TicketStatusChanged] when ticket was audited concurrently
    ///
    async fn approve(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error>;

    ///
    /// ### Errors
    /// same as [TicketsService::approve]
    ///
    async fn reject(
        &self,
        user: &User,
        id: ObjectId,
        reject: input::TicketReject,
    ) -> Result<output::Ticket, Error>;

    ///
    /// ### Errors
    /// same as [TicketsService::approve] except any non voided ticket can be voided
    ///
    async fn void(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error>;

    ///
    /// Returns rejected ticket to Pending keeping its number and amount
    ///
    /// ### Errors
    /// - [Error::Auth] when user is neither sales nor admin
    /// - [Error::TicketNotExist] also when sales user is not the issuer
    /// - [Error::InvalidTransition] when ticket is not Rejected
    /// - [Error::TicketStatusChanged] when ticket was audited concurrently
    ///
    async fn resend(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error>;

    ///
    /// Sends ticket SMS again
    ///
    /// ### Errors
    /// - [Error::TicketNotExist]
    /// - [Error::Validation] when ticket is voided
    ///
    async fn resend_sms(&self, user: &User, id: ObjectId) -> Result<output::Ticket, Error>;

    async fn find_sms_logs(&self, user: &User, id: ObjectId)
        -> Result<Vec<output::SmsLog>, Error>;

    ///
    /// Rendered receipt. Available without authentication.
    ///
    /// ### Errors
    /// - [Error::TicketNotExist]
    ///
    async fn find_receipt_html(&self, id: ObjectId) -> Result<String, Error>;

    ///
    /// ### Errors
    /// - [Error::Auth] when user is not admin
    ///
    async fn data_quality(&self, user: &User) -> Result<output::DataQuality, Error>;

    ///
    /// Sets payment mode of tickets that have none
    ///
    /// ### Errors
    /// - [Error::Auth] when user is not admin
    ///
    async fn fix_data_quality(&self, user: &User) -> Result<output::DataQualityFix, Error>;
}
