//!
//! Module testing if all paths are protected by auth middleware.
//!
//! Any request should return 401 if URI and method is correct, 404 otherwise
//!
mod common;
use common::*;

use bson::oid::ObjectId;
use reqwest::{Client, Method, StatusCode};
use uuid::Uuid;

async fn send(method: Method, path: &str) -> StatusCode {
    init_env();

    let client = Client::new();

    let response = client
        .request(method, format!("http://{}{path}", address()))
        .send()
        .await
        .unwrap();

    response.status()
}

#[tokio::test]
#[ignore = "requires running application"]
async fn auth_routes() {
    assert_eq!(
        send(Method::POST, "/api/v1/auth/logout").await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        send(Method::GET, "/api/v1/auth/me").await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
#[ignore = "requires running application"]
async fn users_routes() {
    let id = Uuid::new_v4();

    for (method, path) in [
        (Method::POST, "/api/v1/users".to_string()),
        (Method::GET, "/api/v1/users".to_string()),
        (Method::GET, "/api/v1/users/export".to_string()),
        (Method::GET, format!("/api/v1/users/{id}")),
        (Method::PUT, format!("/api/v1/users/{id}")),
        (Method::DELETE, format!("/api/v1/users/{id}")),
        (Method::PUT, format!("/api/v1/users/{id}/ticket-range")),
        (Method::POST, format!("/api/v1/users/{id}/unlock")),
        (Method::PUT, format!("/api/v1/users/{id}/password")),
    ] {
        assert_eq!(send(method, &path).await, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
#[ignore = "requires running application"]
async fn customers_routes() {
    let id = ObjectId::new().to_hex();

    for (method, path) in [
        (Method::POST, "/api/v1/customers".to_string()),
        (Method::GET, "/api/v1/customers".to_string()),
        (Method::GET, "/api/v1/customers/export".to_string()),
        (Method::GET, format!("/api/v1/customers/{id}")),
        (Method::PUT, format!("/api/v1/customers/{id}")),
        (Method::DELETE, format!("/api/v1/customers/{id}")),
        (Method::GET, format!("/api/v1/customers/{id}/history")),
    ] {
        assert_eq!(send(method, &path).await, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
#[ignore = "requires running application"]
async fn tickets_routes() {
    let id = ObjectId::new().to_hex();

    for (method, path) in [
        (Method::POST, "/api/v1/tickets".to_string()),
        (Method::GET, "/api/v1/tickets".to_string()),
        (Method::GET, "/api/v1/tickets/export".to_string()),
        (Method::GET, "/api/v1/tickets/data-quality".to_string()),
        (Method::POST, "/api/v1/tickets/data-quality/fix".to_string()),
        (Method::GET, format!("/api/v1/tickets/{id}")),
        (Method::POST, format!("/api/v1/tickets/{id}/approve")),
        (Method::POST, format!("/api/v1/tickets/{id}/reject")),
        (Method::POST, format!("/api/v1/tickets/{id}/void")),
        (Method::POST, format!("/api/v1/tickets/{id}/resend")),
        (Method::POST, format!("/api/v1/tickets/{id}/sms")),
        (Method::GET, format!("/api/v1/tickets/{id}/sms-logs")),
    ] {
        assert_eq!(send(method, &path).await, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
#[ignore = "requires running application"]
async fn reports_and_uploads_routes() {
    for (method, path) in [
        (Method::GET, "/api/v1/reports/revenue"),
        (Method::GET, "/api/v1/dashboard"),
        (Method::POST, "/api/upload"),
        (Method::GET, "/uploads/slip.png"),
    ] {
        assert_eq!(send(method, path).await, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
#[ignore = "requires running application"]
async fn get_non_existent_uri() {
    assert_eq!(
        send(Method::GET, "/this-uri-does-not-exist").await,
        StatusCode::NOT_FOUND
    );
}
