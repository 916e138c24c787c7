use super::{csv_response, parse_object_id};
use crate::{
    application::ApplicationState,
    auth::User,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/tickets", post(issue_ticket).get(get_tickets))
        .route("/api/v1/tickets/export", get(export_tickets))
        .route("/api/v1/tickets/data-quality", get(get_data_quality))
        .route("/api/v1/tickets/data-quality/fix", post(fix_data_quality))
        .route("/api/v1/tickets/:id", get(get_ticket))
        .route("/api/v1/tickets/:id/approve", post(approve_ticket))
        .route("/api/v1/tickets/:id/reject", post(reject_ticket))
        .route("/api/v1/tickets/:id/void", post(void_ticket))
        .route("/api/v1/tickets/:id/resend", post(resend_ticket))
        .route("/api/v1/tickets/:id/sms", post(resend_ticket_sms))
        .route("/api/v1/tickets/:id/sms-logs", get(get_ticket_sms_logs))
}

///
/// Receipts are opened from links in SMS, so they skip authentication
///
pub fn public_routing() -> Router<ApplicationState> {
    Router::new().route("/tickets/:file", get(get_receipt))
}

async fn issue_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Json(ticket): Json<input::TicketCreate>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let ticket = tickets_service.issue(&user, ticket).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

async fn get_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Query(filters): Query<input::TicketFilters>,
    Query(pagination): Query<input::Pagination>,
) -> Result<(StatusCode, Json<Vec<output::Ticket>>), Error> {
    let tickets = tickets_service.find_many(&user, filters, pagination).await?;

    Ok((StatusCode::OK, Json(tickets)))
}

async fn export_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Query(filters): Query<input::TicketFilters>,
) -> Result<Response, Error> {
    let export = tickets_service.export_csv(&user, filters).await?;

    Ok(csv_response(export))
}

async fn get_data_quality(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<output::DataQuality>), Error> {
    let data_quality = tickets_service.data_quality(&user).await?;

    Ok((StatusCode::OK, Json(data_quality)))
}

async fn fix_data_quality(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<output::DataQualityFix>), Error> {
    let fix = tickets_service.fix_data_quality(&user).await?;

    Ok((StatusCode::OK, Json(fix)))
}

async fn get_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let id = parse_object_id(&id)?;
    let ticket = tickets_service.find(&user, id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

async fn approve_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let id = parse_object_id(&id)?;
    let ticket = tickets_service.approve(&user, id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

async fn reject_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(reject): Json<input::TicketReject>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let id = parse_object_id(&id)?;
    let ticket = tickets_service.reject(&user, id, reject).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

async fn void_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let id = parse_object_id(&id)?;
    let ticket = tickets_service.void(&user, id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

async fn resend_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let id = parse_object_id(&id)?;
    let ticket = tickets_service.resend(&user, id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

async fn resend_ticket_sms(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let id = parse_object_id(&id)?;
    let ticket = tickets_service.resend_sms(&user, id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

async fn get_ticket_sms_logs(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Vec<output::SmsLog>>), Error> {
    let id = parse_object_id(&id)?;
    let sms_logs = tickets_service.find_sms_logs(&user, id).await?;

    Ok((StatusCode::OK, Json(sms_logs)))
}

///
/// `file` is `{ticket id}.pdf`, the extension is kept for links already sent
///
async fn get_receipt(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(file): Path<String>,
) -> Result<Html<String>, Error> {
    let id = file.strip_suffix(".pdf").unwrap_or(&file);
    let id = parse_object_id(id).map_err(|_| Error::TicketNotExist)?;
    let html = tickets_service.find_receipt_html(id).await?;

    Ok(Html(html))
}
