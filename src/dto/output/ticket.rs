use crate::{
    domain::{AuditStatus, PaymentMode, SmsStatus},
    repository,
};
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Ticket {
    pub id: String,
    pub ticket_number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub amount: Decimal,
    pub payment_mode: Option<PaymentMode>,
    pub bank_receipt_number: Option<String>,
    pub attachment: Option<String>,
    pub description: Option<String>,
    pub branch: String,
    pub issued_by: Uuid,
    pub issued_by_name: String,
    pub audit_status: AuditStatus,
    pub audit_note: Option<String>,
    pub audited_by: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub audited_at: Option<OffsetDateTime>,
    pub sms_status: SmsStatus,
    pub receipt_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Ticket {
    pub fn new(ticket: repository::Ticket, public_url: &str) -> Self {
        let id = ticket.id.to_hex();
        let receipt_url = receipt_url(public_url, &id);

        Self {
            id,
            ticket_number: ticket.ticket_number,
            customer_id: ticket.customer_id.to_hex(),
            customer_name: ticket.customer_name,
            customer_phone: ticket.customer_phone,
            amount: ticket.amount,
            payment_mode: ticket.payment_mode,
            bank_receipt_number: ticket.bank_receipt_number,
            attachment: ticket.attachment,
            description: ticket.description,
            branch: ticket.branch,
            issued_by: ticket.issued_by,
            issued_by_name: ticket.issued_by_name,
            audit_status: ticket.audit_status,
            audit_note: ticket.audit_note,
            audited_by: ticket.audited_by,
            audited_at: ticket.audited_at,
            sms_status: ticket.sms_status,
            receipt_url,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

///
/// Public link to the rendered receipt
///
pub fn receipt_url(public_url: &str, ticket_id: &str) -> String {
    format!("{}/tickets/{ticket_id}.pdf", public_url.trim_end_matches('/'))
}
