use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

///
/// Management of user accounts. All operations require admin or superadmin,
/// only superadmin may manage other superadmins.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Validation] when username or password is invalid
    /// - [Error::TicketRange] when range bounds are invalid
    /// - [Error::TicketRangeOverlap] when range overlaps range of other user
    /// - [Error::UsernameTaken] when username is already used
    ///
    async fn create(&self, user: &User, new_user: input::UserCreate)
        -> Result<output::User, Error>;

    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    ///
    async fn find(&self, user: &User, id: Uuid) -> Result<output::User, Error>;

    async fn find_many(
        &self,
        user: &User,
        filters: input::UserFilters,
    ) -> Result<Vec<output::User>, Error>;

    async fn export_csv(
        &self,
        user: &User,
        filters: input::UserFilters,
    ) -> Result<output::CsvExport, Error>;

    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    ///
    async fn update(
        &self,
        user: &User,
        id: Uuid,
        update: input::UserUpdate,
    ) -> Result<output::User, Error>;

    ///
    /// Soft deletes the user and closes all of their sessions
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    /// - [Error::Validation] when user tries to deactivate themselves
    ///
    async fn deactivate(&self, user: &User, id: Uuid) -> Result<(), Error>;

    ///
    /// Replaces ticket number range. `None` removes the range.
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    /// - [Error::TicketRange] when range bounds are invalid
    /// - [Error::TicketRangeOverlap] when range overlaps range of other user
    ///
    async fn assign_ticket_range(
        &self,
        user: &User,
        id: Uuid,
        ticket_range: Option<input::TicketRangeAssignment>,
    ) -> Result<output::User, Error>;

    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    ///
    async fn unlock(&self, user: &User, id: Uuid) -> Result<output::User, Error>;

    ///
    /// Sets new password and logs the user out everywhere
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    /// - [Error::Validation] when password is too short
    ///
    async fn update_password(
        &self,
        user: &User,
        id: Uuid,
        password: input::UserPassword,
    ) -> Result<(), Error>;
}
