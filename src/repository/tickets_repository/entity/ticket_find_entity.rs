use crate::domain::{AuditStatus, PaymentMode, SmsStatus};
use bson::{oid::ObjectId, DateTime, Uuid};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,

    pub ticket_number: String,

    pub customer_id: ObjectId,
    pub customer_name: String,
    pub customer_phone: String,

    pub amount: Decimal,
    #[serde(default)]
    pub payment_mode: Option<PaymentMode>,
    #[serde(default)]
    pub bank_receipt_number: Option<String>,
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    pub branch: String,
    pub issued_by: Uuid,
    pub issued_by_name: String,

    pub audit_status: AuditStatus,
    #[serde(default)]
    pub audit_note: Option<String>,
    #[serde(default)]
    pub audited_by: Option<Uuid>,
    #[serde(default)]
    pub audited_at: Option<DateTime>,

    pub sms_status: SmsStatus,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Deserialize)]
pub struct TicketHtmlFindEntity {
    pub html: String,
}
