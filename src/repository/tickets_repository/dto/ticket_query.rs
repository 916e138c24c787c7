use crate::domain::{AuditStatus, PaymentMode};
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Ticket search criteria. Empty query matches all tickets.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketQuery {
    pub audit_status: Option<AuditStatus>,
    pub payment_mode: Option<PaymentMode>,
    pub missing_payment_mode: bool,
    pub branch: Option<String>,
    pub issued_by: Option<Uuid>,
    pub customer_id: Option<ObjectId>,
    pub ticket_number: Option<String>,

    /// inclusive
    pub created_from: Option<OffsetDateTime>,
    /// exclusive
    pub created_to: Option<OffsetDateTime>,
}
