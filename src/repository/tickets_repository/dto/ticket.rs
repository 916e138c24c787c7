use crate::{
    domain::{AuditStatus, PaymentMode, SmsStatus},
    repository::tickets_repository::entity::TicketFindEntity,
};
use bson::oid::ObjectId;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Ticket without rendered receipt
///
#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: ObjectId,
    pub ticket_number: String,
    pub customer_id: ObjectId,
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
    pub audited_at: Option<OffsetDateTime>,
    pub sms_status: SmsStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id,
            ticket_number: value.ticket_number,
            customer_id: value.customer_id,
            customer_name: value.customer_name,
            customer_phone: value.customer_phone,
            amount: value.amount,
            payment_mode: value.payment_mode,
            bank_receipt_number: value.bank_receipt_number,
            attachment: value.attachment,
            description: value.description,
            branch: value.branch,
            issued_by: value.issued_by.into(),
            issued_by_name: value.issued_by_name,
            audit_status: value.audit_status,
            audit_note: value.audit_note,
            audited_by: value.audited_by.map(Uuid::from),
            audited_at: value.audited_at.map(OffsetDateTime::from),
            sms_status: value.sms_status,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
