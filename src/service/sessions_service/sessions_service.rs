use crate::error::Error;
use axum::async_trait;
use uuid::Uuid;

///
/// Server side sessions of logged in users.
///
/// Session expires after period of inactivity
/// or when it reaches maximum lifetime.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionsService: Send + Sync {
    ///
    /// ### Returns
    /// ID of created session
    ///
    async fn create(&self, user_id: Uuid) -> Uuid;

    ///
    /// Validates session and resets its inactivity timer
    ///
    /// ### Errors
    /// - [Error::SessionExpired] when
    ///     - session does not exist or was removed
    ///     - session belongs to other user
    ///     - session was inactive for too long
    ///     - session reached maximum lifetime
    ///
    async fn touch(&self, session_id: Uuid, user_id: Uuid) -> Result<(), Error>;

    async fn remove(&self, session_id: Uuid);

    ///
    /// Logs the user out everywhere
    ///
    async fn remove_user_sessions(&self, user_id: Uuid);
}
