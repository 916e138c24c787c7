use super::{NewUser, User};
use crate::{domain::TicketRange, dto::input, repository::Error};
use axum::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Inserts new active, unlocked user
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when username is taken
    ///
    async fn insert(&self, user: NewUser) -> Result<User, Error>;

    async fn find(&self, id: Uuid) -> Result<Option<User>, Error>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error>;

    ///
    /// Finds users matching filters sorted ascending by username
    ///
    async fn find_many(&self, filters: input::UserFilters) -> Result<Vec<User>, Error>;

    ///
    /// Finds any user other than `exclude_id` whose range overlaps `range`
    ///
    async fn find_with_overlapping_range(
        &self,
        range: TicketRange,
        exclude_id: Uuid,
    ) -> Result<Option<User>, Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn update_profile(&self, id: Uuid, profile: input::UserUpdate) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn update_is_active(&self, id: Uuid, is_active: bool) -> Result<(), Error>;

    ///
    /// Replaces whole range. `None` removes range from the user.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn update_ticket_range(
        &self,
        id: Uuid,
        ticket_range: Option<TicketRange>,
    ) -> Result<(), Error>;

    ///
    /// Sets `ticket_range.current` only if the stored range still equals `expected`.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - user does not exist
    ///     - user has no range
    ///     - range was reassigned or its current number was changed by someone else
    ///
    async fn compare_and_set_ticket_range_current(
        &self,
        id: Uuid,
        expected: TicketRange,
        current: i64,
    ) -> Result<(), Error>;

    ///
    /// Increments failed login counter and locks the user
    /// once the counter reaches `lock_threshold`.
    ///
    /// ### Returns
    /// user after the update
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn record_failed_login(&self, id: Uuid, lock_threshold: u32) -> Result<User, Error>;

    ///
    /// Resets failed login counter and stores time of login
    ///
    async fn record_successful_login(
        &self,
        id: Uuid,
        logged_in_at: OffsetDateTime,
    ) -> Result<(), Error>;

    ///
    /// Resets failed login counter and lock
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn unlock(&self, id: Uuid) -> Result<(), Error>;
}
