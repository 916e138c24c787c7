use crate::domain::{AuditStatus, PaymentMode};
use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct TicketCreate {
    pub customer_id: String,
    pub amount: Decimal,
    pub payment_mode: Option<PaymentMode>,
    pub bank_receipt_number: Option<String>,

    /// path returned by upload endpoint
    pub attachment: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TicketReject {
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketFilters {
    pub audit_status: Option<AuditStatus>,
    pub payment_mode: Option<PaymentMode>,
    pub missing_payment_mode: Option<bool>,
    pub branch: Option<String>,
    pub issued_by: Option<Uuid>,
    pub customer_id: Option<String>,
    pub ticket_number: Option<String>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub from: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub to: Option<OffsetDateTime>,
}

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    #[test]
    fn ticket_create_amount_as_string() {
        let json = r#"{
            "customer_id": "65e1b2c3d4e5f60718293a4b",
            "amount": "150000.50",
            "payment_mode": "BANK",
            "bank_receipt_number": "CRDB-99812"
        }"#;

        let ticket = serde_json::from_str::<TicketCreate>(json).unwrap();

        assert_eq!(ticket.amount, dec!(150000.50));
        assert_eq!(ticket.payment_mode, Some(PaymentMode::Bank));
        assert!(ticket.attachment.is_none());
    }

    #[test]
    fn ticket_filters_dates() {
        let json = r#"{
            "audit_status": "Pending",
            "from": "2024-03-01T00:00:00Z"
        }"#;

        let filters = serde_json::from_str::<TicketFilters>(json).unwrap();

        assert_eq!(filters.audit_status, Some(AuditStatus::Pending));
        assert_eq!(filters.from, Some(datetime!(2024-03-01 00:00 UTC)));
        assert!(filters.to.is_none());
    }
}
