use super::{Customer, NewCustomer};
use crate::{dto::input, repository::Error};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomersRepository: Send + Sync {
    ///
    /// Inserts new active customer
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when phone is already registered
    ///
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Customer>, Error>;

    ///
    /// Finds customers sorted descending by registration date.
    /// Without pagination all matching customers are returned.
    ///
    async fn find_many(
        &self,
        filters: input::CustomerFilters,
        pagination: Option<input::Pagination>,
    ) -> Result<Vec<Customer>, Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when customer does not exist
    /// - [Error::InsertUniqueViolation] when new phone is already registered
    ///
    async fn update(&self, id: ObjectId, customer: input::CustomerUpdate) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when customer does not exist
    ///
    async fn update_is_active(&self, id: ObjectId, is_active: bool) -> Result<(), Error>;
}
