use super::csv_response;
use crate::{
    application::ApplicationState,
    auth::User,
    dto::{input, output},
    error::Error,
    service::users_service::UsersService,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::{get, post, put},
    Extension, Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/users", post(create_user).get(get_users))
        .route("/api/v1/users/export", get(export_users))
        .route(
            "/api/v1/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/v1/users/:id/ticket-range", put(update_ticket_range))
        .route("/api/v1/users/:id/unlock", post(unlock_user))
        .route("/api/v1/users/:id/password", put(update_password))
}

async fn create_user(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Json(new_user): Json<input::UserCreate>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let created = users_service.create(&user, new_user).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_users(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Query(filters): Query<input::UserFilters>,
) -> Result<(StatusCode, Json<Vec<output::User>>), Error> {
    let users = users_service.find_many(&user, filters).await?;

    Ok((StatusCode::OK, Json(users)))
}

async fn export_users(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Query(filters): Query<input::UserFilters>,
) -> Result<Response, Error> {
    let export = users_service.export_csv(&user, filters).await?;

    Ok(csv_response(export))
}

async fn get_user(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let found = users_service.find(&user, id).await?;

    Ok((StatusCode::OK, Json(found)))
}

async fn update_user(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(update): Json<input::UserUpdate>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let updated = users_service.update(&user, id, update).await?;

    Ok((StatusCode::OK, Json(updated)))
}

async fn delete_user(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    users_service.deactivate(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

///
/// `null` body removes the range
///
async fn update_ticket_range(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(ticket_range): Json<Option<input::TicketRangeAssignment>>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let updated = users_service
        .assign_ticket_range(&user, id, ticket_range)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

async fn unlock_user(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let updated = users_service.unlock(&user, id).await?;

    Ok((StatusCode::OK, Json(updated)))
}

async fn update_password(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(password): Json<input::UserPassword>,
) -> Result<StatusCode, Error> {
    users_service.update_password(&user, id, password).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod test {
    use super::super::test::*;
    use crate::{error::Error, dto::input};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[tokio::test]
    async fn clear_ticket_range_with_null_body() {
        let mut mocks = Mocks::with_live_session();
        mocks
            .users_service
            .expect_assign_ticket_range()
            .withf(|_, _, ticket_range| ticket_range.is_none())
            .times(1)
            .returning(|_, _, _| Err(Error::UserNotExist));
        let router = mocks.router();

        let uri = format!("/api/v1/users/{}/ticket-range", Uuid::new_v4());
        let response = router
            .oneshot(json_request(Method::PUT, &uri, &bearer(&["admin"]), json!(null)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn assign_ticket_range_body() {
        let mut mocks = Mocks::with_live_session();
        mocks
            .users_service
            .expect_assign_ticket_range()
            .withf(|_, _, ticket_range| {
                *ticket_range
                    == Some(input::TicketRangeAssignment {
                        start: 1001,
                        end: 2000,
                        current: None,
                    })
            })
            .times(1)
            .returning(|_, _, _| Err(Error::TicketRangeOverlap));
        let router = mocks.router();

        let uri = format!("/api/v1/users/{}/ticket-range", Uuid::new_v4());
        let body = json!({ "start": 1001, "end": 2000 });
        let response = router
            .oneshot(json_request(Method::PUT, &uri, &bearer(&["admin"]), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn delete_user() {
        let mut mocks = Mocks::with_live_session();
        mocks
            .users_service
            .expect_deactivate()
            .times(1)
            .returning(|_, _| Ok(()));
        let router = mocks.router();

        let uri = format!("/api/v1/users/{}", Uuid::new_v4());
        let authorization = bearer(&["superadmin"]);
        let response = router
            .oneshot(request(Method::DELETE, &uri, Some(&authorization)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn export_users_csv() {
        let mut mocks = Mocks::with_live_session();
        mocks.users_service.expect_export_csv().returning(|_, _| {
            Ok(crate::dto::output::CsvExport {
                filename: "users.csv",
                content: b"username\nneema\n".to_vec(),
            })
        });
        let router = mocks.router();

        let authorization = bearer(&["admin"]);
        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/users/export?role=sales",
                Some(&authorization),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "username\nneema\n");
    }
}
