use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::{extract::DefaultBodyLimit, Router};

pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
) -> Router {
    let sessions_service = application_state.sessions_service.clone();

    // RequestBodyLimitLayer replaces the default limit of extractors
    routing(&application_middleware, sessions_service)
        .with_state(application_state)
        .layer(DefaultBodyLimit::disable())
        .layer(application_middleware.body_limit)
        .layer(application_middleware.trace)
}
