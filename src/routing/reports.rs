use crate::{
    application::ApplicationState,
    auth::User,
    dto::{input, output},
    error::Error,
    service::reports_service::ReportsService,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/reports/revenue", get(get_revenue_report))
        .route("/api/v1/dashboard", get(get_dashboard))
}

async fn get_revenue_report(
    State(reports_service): State<Arc<dyn ReportsService>>,
    Extension(user): Extension<User>,
    Query(filters): Query<input::ReportFilters>,
) -> Result<(StatusCode, Json<output::RevenueReport>), Error> {
    let report = reports_service.revenue(&user, filters).await?;

    Ok((StatusCode::OK, Json(report)))
}

async fn get_dashboard(
    State(reports_service): State<Arc<dyn ReportsService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<output::Dashboard>), Error> {
    let dashboard = reports_service.dashboard(&user).await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

#[cfg(test)]
mod test {
    use super::super::test::*;
    use crate::error::Error;
    use axum::http::{Method, StatusCode};
    use time::macros::datetime;
    use tower::ServiceExt;

    #[tokio::test]
    async fn revenue_report_period_from_query() {
        let mut mocks = Mocks::with_live_session();
        mocks
            .reports_service
            .expect_revenue()
            .withf(|_, filters| {
                filters.from == Some(datetime!(2024-03-01 0:00 UTC))
                    && filters.to == Some(datetime!(2024-04-01 0:00 UTC))
                    && filters.branch.as_deref() == Some("mbezi")
            })
            .times(1)
            .returning(|_, _| Err(Error::Validation("period ends before it starts")));
        let router = mocks.router();

        let authorization = bearer(&["admin"]);
        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/reports/revenue?from=2024-03-01T00:00:00Z&to=2024-04-01T00:00:00Z&branch=mbezi",
                Some(&authorization),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
