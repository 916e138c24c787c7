use crate::domain::{AuditStatus, PaymentMode, SmsStatus};
use bson::{oid::ObjectId, DateTime, Uuid};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity<'a> {
    pub _id: ObjectId,

    pub ticket_number: &'a str,

    pub customer_id: ObjectId,
    pub customer_name: &'a str,
    pub customer_phone: &'a str,

    pub amount: Decimal,
    pub payment_mode: Option<PaymentMode>,
    pub bank_receipt_number: Option<&'a str>,
    pub attachment: Option<&'a str>,
    pub description: Option<&'a str>,

    pub branch: &'a str,
    pub issued_by: Uuid,
    pub issued_by_name: &'a str,

    pub audit_status: AuditStatus,
    pub audit_note: Option<&'a str>,
    pub audited_by: Option<Uuid>,
    pub audited_at: Option<DateTime>,

    pub sms_status: SmsStatus,

    pub html: &'a str,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}
