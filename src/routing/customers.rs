use super::{csv_response, parse_object_id};
use crate::{
    application::ApplicationState,
    auth::User,
    dto::{input, output},
    error::Error,
    service::customers_service::CustomersService,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/customers", post(create_customer).get(get_customers))
        .route("/api/v1/customers/export", get(export_customers))
        .route(
            "/api/v1/customers/:id",
            get(get_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
        .route("/api/v1/customers/:id/history", get(get_customer_history))
}

async fn create_customer(
    State(customers_service): State<Arc<dyn CustomersService>>,
    Extension(user): Extension<User>,
    Json(customer): Json<input::CustomerCreate>,
) -> Result<(StatusCode, Json<output::Customer>), Error> {
    let customer = customers_service.create(&user, customer).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customers(
    State(customers_service): State<Arc<dyn CustomersService>>,
    Extension(user): Extension<User>,
    Query(filters): Query<input::CustomerFilters>,
    Query(pagination): Query<input::Pagination>,
) -> Result<(StatusCode, Json<Vec<output::Customer>>), Error> {
    let customers = customers_service
        .find_many(&user, filters, pagination)
        .await?;

    Ok((StatusCode::OK, Json(customers)))
}

async fn export_customers(
    State(customers_service): State<Arc<dyn CustomersService>>,
    Extension(user): Extension<User>,
    Query(filters): Query<input::CustomerFilters>,
) -> Result<Response, Error> {
    let export = customers_service.export_csv(&user, filters).await?;

    Ok(csv_response(export))
}

async fn get_customer(
    State(customers_service): State<Arc<dyn CustomersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::Customer>), Error> {
    let id = parse_object_id(&id)?;
    let customer = customers_service.find(&user, id).await?;

    Ok((StatusCode::OK, Json(customer)))
}

async fn update_customer(
    State(customers_service): State<Arc<dyn CustomersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(customer): Json<input::CustomerUpdate>,
) -> Result<(StatusCode, Json<output::Customer>), Error> {
    let id = parse_object_id(&id)?;
    let customer = customers_service.update(&user, id, customer).await?;

    Ok((StatusCode::OK, Json(customer)))
}

async fn delete_customer(
    State(customers_service): State<Arc<dyn CustomersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = parse_object_id(&id)?;
    customers_service.deactivate(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn get_customer_history(
    State(customers_service): State<Arc<dyn CustomersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::CustomerHistory>), Error> {
    let id = parse_object_id(&id)?;
    let history = customers_service.history(&user, id).await?;

    Ok((StatusCode::OK, Json(history)))
}

#[cfg(test)]
mod test {
    use super::super::test::*;
    use crate::{dto::input, error::Error};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn get_customer_invalid_id() {
        let mut mocks = Mocks::with_live_session();
        mocks.customers_service.expect_find().never();
        let router = mocks.router();

        let authorization = bearer(&["sales"]);
        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/customers/not-an-id",
                Some(&authorization),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn get_customers_filters_and_pagination() {
        let mut mocks = Mocks::with_live_session();
        mocks
            .customers_service
            .expect_find_many()
            .withf(|_, filters, pagination| {
                filters.search.as_deref() == Some("neema")
                    && filters.is_active == Some(true)
                    && *pagination
                        == input::Pagination {
                            page_idx: 2,
                            page_size: 10,
                        }
            })
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        let router = mocks.router();

        let authorization = bearer(&["sales"]);
        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/customers?search=neema&is_active=true&page_idx=2&page_size=10",
                Some(&authorization),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn create_customer_phone_taken() {
        let mut mocks = Mocks::with_live_session();
        mocks
            .customers_service
            .expect_create()
            .returning(|_, _| Err(Error::CustomerPhoneTaken));
        let router = mocks.router();

        let body = json!({ "full_name": "Neema Mushi", "phone": "+255712345678" });
        let response = router
            .oneshot(json_request(
                Method::POST,
                "/api/v1/customers",
                &bearer(&["sales"]),
                body,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
