use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportsService: Send + Sync {
    ///
    /// Revenue of tickets created within the period.
    /// Sales users only get their own tickets.
    ///
    /// ### Errors
    /// - [Error::Validation] when period ends before it starts
    ///
    async fn revenue(
        &self,
        user: &User,
        filters: input::ReportFilters,
    ) -> Result<output::RevenueReport, Error>;

    async fn dashboard(&self, user: &User) -> Result<output::Dashboard, Error>;
}
