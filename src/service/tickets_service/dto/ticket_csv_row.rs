use crate::{repository::Ticket, service::csv_export::format_datetime};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketCsvRow {
    pub ticket_number: String,
    pub created_at: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub amount: Decimal,
    pub payment_mode: String,
    pub bank_receipt_number: String,
    pub branch: String,
    pub issued_by: String,
    pub audit_status: String,
    pub audit_note: String,
    pub sms_status: String,
    pub description: String,
}

impl From<Ticket> for TicketCsvRow {
    fn from(value: Ticket) -> Self {
        Self {
            ticket_number: value.ticket_number,
            created_at: format_datetime(value.created_at),
            customer_name: value.customer_name,
            customer_phone: value.customer_phone,
            amount: value.amount,
            payment_mode: value
                .payment_mode
                .map(|payment_mode| payment_mode.as_ref().to_string())
                .unwrap_or_default(),
            bank_receipt_number: value.bank_receipt_number.unwrap_or_default(),
            branch: value.branch,
            issued_by: value.issued_by_name,
            audit_status: value.audit_status.as_ref().to_string(),
            audit_note: value.audit_note.unwrap_or_default(),
            sms_status: value.sms_status.as_ref().to_string(),
            description: value.description.unwrap_or_default(),
        }
    }
}
