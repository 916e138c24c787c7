use crate::{
    application::ApplicationState,
    auth::User,
    dto::{input, output},
    error::Error,
    service::auth_service::AuthService,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn public_routing() -> Router<ApplicationState> {
    Router::new().route("/api/v1/auth/login", post(login))
}

pub fn protected_routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/me", get(me))
}

async fn login(
    State(auth_service): State<Arc<dyn AuthService>>,
    Json(login): Json<input::Login>,
) -> Result<(StatusCode, Json<output::LoginResponse>), Error> {
    let response = auth_service.login(login).await?;

    Ok((StatusCode::OK, Json(response)))
}

async fn logout(
    State(auth_service): State<Arc<dyn AuthService>>,
    Extension(user): Extension<User>,
) -> StatusCode {
    auth_service.logout(&user).await;

    StatusCode::NO_CONTENT
}

async fn me(
    State(auth_service): State<Arc<dyn AuthService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let user = auth_service.me(&user).await?;

    Ok((StatusCode::OK, Json(user)))
}
