use crate::domain::AuditStatus;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

///
/// Revenue of tickets that are not voided.
/// Tickets without payment mode are counted as cash.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RevenueTotals {
    pub ticket_count: u64,
    pub total_amount: Decimal,
    pub cash_amount: Decimal,
    pub bank_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub audit_status: AuditStatus,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchRevenue {
    pub branch: String,
    #[serde(flatten)]
    pub totals: RevenueTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalespersonRevenue {
    pub issued_by: Uuid,
    pub issued_by_name: String,
    #[serde(flatten)]
    pub totals: RevenueTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRevenue {
    /// YYYY-MM-DD in UTC
    pub day: String,
    #[serde(flatten)]
    pub totals: RevenueTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueReport {
    pub totals: RevenueTotals,

    /// includes voided tickets
    pub status_counts: Vec<StatusCount>,
    pub missing_payment_mode_count: u64,

    pub by_branch: Vec<BranchRevenue>,
    pub by_salesperson: Vec<SalespersonRevenue>,
    pub by_day: Vec<DayRevenue>,
}
