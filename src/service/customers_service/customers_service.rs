use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomersService: Send + Sync {
    ///
    /// Registers customer in the branch of the user unless other branch is given
    ///
    /// ### Errors
    /// - [Error::Validation] when name or phone is empty
    /// - [Error::CustomerPhoneTaken] when phone is already registered
    ///
    async fn create(
        &self,
        user: &User,
        customer: input::CustomerCreate,
    ) -> Result<output::Customer, Error>;

    ///
    /// ### Errors
    /// - [Error::CustomerNotExist] when customer does not exist
    ///
    async fn find(&self, user: &User, id: ObjectId) -> Result<output::Customer, Error>;

    async fn find_many(
        &self,
        user: &User,
        filters: input::CustomerFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Customer>, Error>;

    async fn export_csv(
        &self,
        user: &User,
        filters: input::CustomerFilters,
    ) -> Result<output::CsvExport, Error>;

    ///
    /// ### Errors
    /// - [Error::CustomerNotExist] when customer does not exist
    /// - [Error::CustomerPhoneTaken] when new phone belongs to other customer
    ///
    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        customer: input::CustomerUpdate,
    ) -> Result<output::Customer, Error>;

    ///
    /// Soft deletes customer. Tickets of the customer are kept.
    ///
    /// ### Errors
    /// - [Error::CustomerNotExist] when customer does not exist
    ///
    async fn deactivate(&self, user: &User, id: ObjectId) -> Result<(), Error>;

    ///
    /// Customer with tickets issued for them.
    /// Sales users only see their own tickets.
    ///
    /// ### Errors
    /// - [Error::CustomerNotExist] when customer does not exist
    ///
    async fn history(&self, user: &User, id: ObjectId) -> Result<output::CustomerHistory, Error>;
}
