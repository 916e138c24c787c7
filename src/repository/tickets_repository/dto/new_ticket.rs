use crate::domain::PaymentMode;
use bson::oid::ObjectId;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct NewTicket {
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
    pub html: String,
    pub created_at: OffsetDateTime,
}
