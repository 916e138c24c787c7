use crate::{auth::User, error::Error, service::sessions_service::SessionsService};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Extension,
};
use std::sync::Arc;

///
/// Rejects tokens whose server side session expired or was closed,
/// otherwise resets inactivity timer of the session
///
pub async fn require_session(
    State(sessions_service): State<Arc<dyn SessionsService>>,
    Extension(user): Extension<User>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    sessions_service.touch(user.session_id, user.id).await?;

    Ok(next.run(request).await)
}
