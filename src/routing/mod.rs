mod auth;
mod customers;
mod reports;
mod session;
mod tickets;
mod uploads;
mod users;

use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::output,
    error::Error,
    service::sessions_service::SessionsService,
};
use axum::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing(
    application_middleware: &ApplicationMiddleware,
    sessions_service: Arc<dyn SessionsService>,
) -> Router<ApplicationState> {
    Router::new()
        .merge(auth::protected_routing())
        .merge(users::routing())
        .merge(customers::routing())
        .merge(tickets::routing())
        .merge(reports::routing())
        .merge(uploads::routing())
        .route_layer(axum::middleware::from_fn_with_state(
            sessions_service,
            session::require_session,
        ))
        .route_layer(application_middleware.auth.clone())
        .merge(auth::public_routing())
        .merge(tickets::public_routing())
}

fn parse_object_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| Error::Validation("invalid id"))
}

fn csv_response(export: output::CsvExport) -> Response {
    let headers = [
        (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ),
    ];

    (headers, export.content).into_response()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        application::create_middleware_with,
        service::{
            auth_service::MockAuthService, customers_service::MockCustomersService,
            reports_service::MockReportsService, sessions_service::MockSessionsService,
            tickets_service::MockTicketsService, uploads_service::MockUploadsService,
            users_service::MockUsersService,
        },
    };
    use axum::{
        body::{to_bytes, Body},
        http::{header::AUTHORIZATION, Method, Request, StatusCode},
    };
    use jsonwebtoken::DecodingKey;
    use jwt_auth::test::create_jwt;
    use tower::ServiceExt;
    use uuid::Uuid;

    pub const SECRET: &str = "test secret";

    pub struct Mocks {
        pub auth_service: MockAuthService,
        pub sessions_service: MockSessionsService,
        pub users_service: MockUsersService,
        pub customers_service: MockCustomersService,
        pub tickets_service: MockTicketsService,
        pub reports_service: MockReportsService,
        pub uploads_service: MockUploadsService,
    }

    impl Mocks {
        pub fn new() -> Self {
            Self {
                auth_service: MockAuthService::new(),
                sessions_service: MockSessionsService::new(),
                users_service: MockUsersService::new(),
                customers_service: MockCustomersService::new(),
                tickets_service: MockTicketsService::new(),
                reports_service: MockReportsService::new(),
                uploads_service: MockUploadsService::new(),
            }
        }

        ///
        /// Every session is valid
        ///
        pub fn with_live_session() -> Self {
            let mut mocks = Self::new();
            mocks
                .sessions_service
                .expect_touch()
                .returning(|_, _| Ok(()));
            mocks
        }

        pub fn router(self) -> Router {
            let sessions_service: Arc<dyn SessionsService> = Arc::new(self.sessions_service);
            let state = ApplicationState {
                auth_service: Arc::new(self.auth_service),
                sessions_service: sessions_service.clone(),
                users_service: Arc::new(self.users_service),
                customers_service: Arc::new(self.customers_service),
                tickets_service: Arc::new(self.tickets_service),
                reports_service: Arc::new(self.reports_service),
                uploads_service: Arc::new(self.uploads_service),
            };
            let jwt_key = DecodingKey::from_secret(SECRET.as_bytes());
            let middleware = create_middleware_with(jwt_key, usize::MAX);

            routing(&middleware, sessions_service).with_state(state)
        }
    }

    pub fn bearer(roles: &[&str]) -> String {
        let jwt = create_jwt(Uuid::new_v4(), Uuid::new_v4(), roles, "mbezi", SECRET);
        format!("Bearer {jwt}")
    }

    pub fn request(method: Method, uri: &str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(authorization) = authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        builder.body(Body::empty()).unwrap()
    }

    pub fn json_request(
        method: Method,
        uri: &str,
        authorization: &str,
        body: serde_json::Value,
    ) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn body_string(response: Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn protected_routes_require_token() {
        let uris = [
            (Method::POST, "/api/v1/auth/logout"),
            (Method::GET, "/api/v1/auth/me"),
            (Method::GET, "/api/v1/users"),
            (Method::GET, "/api/v1/users/export"),
            (Method::GET, "/api/v1/customers"),
            (Method::GET, "/api/v1/tickets"),
            (Method::GET, "/api/v1/tickets/data-quality"),
            (Method::POST, "/api/v1/tickets/65e1b2c3d4e5f60718293a4b/approve"),
            (Method::GET, "/api/v1/reports/revenue"),
            (Method::GET, "/api/v1/dashboard"),
            (Method::POST, "/api/upload"),
        ];

        for (method, uri) in uris {
            let router = Mocks::new().router();

            let response = router.oneshot(request(method, uri, None)).await.unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }
    }

    #[tokio::test]
    async fn expired_session_rejected() {
        let mut mocks = Mocks::new();
        mocks
            .sessions_service
            .expect_touch()
            .returning(|_, _| Err(Error::SessionExpired));
        mocks.tickets_service.expect_find_many().never();
        let router = mocks.router();

        let authorization = bearer(&["sales"]);
        let response = router
            .oneshot(request(Method::GET, "/api/v1/tickets", Some(&authorization)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn csv_response_headers() {
        let response = csv_response(output::CsvExport {
            filename: "tickets.csv",
            content: b"ticket_number\n1001\n".to_vec(),
        });

        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[CONTENT_DISPOSITION],
            "attachment; filename=\"tickets.csv\""
        );
    }
}
