use crate::domain::PaymentMode;
use rust_decimal::Decimal;
use time::OffsetDateTime;

pub struct Receipt<'a> {
    pub organization_name: &'a str,
    pub ticket_number: &'a str,
    pub issued_at: OffsetDateTime,
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
    pub member_number: Option<&'a str>,
    pub amount: Decimal,
    pub payment_mode: PaymentMode,
    pub bank_receipt_number: Option<&'a str>,
    pub branch: &'a str,
    pub issued_by_name: &'a str,
    pub description: Option<&'a str>,
}
