use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    ///
    /// Verifies credentials and opens new session
    ///
    /// ### Returns
    /// signed token and logged in user
    ///
    /// ### Errors
    /// - [Error::InvalidCredentials] when
    ///     - user does not exist
    ///     - password is wrong
    /// - [Error::AccountLocked] when
    ///     - account was locked before
    ///     - this attempt reached the failed attempts limit
    /// - [Error::Forbidden] when account is deactivated
    ///
    async fn login(&self, login: input::Login) -> Result<output::LoginResponse, Error>;

    ///
    /// Closes session of the token
    ///
    async fn logout(&self, user: &User);

    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user was removed after login
    ///
    async fn me(&self, user: &User) -> Result<output::User, Error>;
}
