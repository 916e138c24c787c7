use crate::{
    domain::{checked_add, AmountOverflow, AuditStatus, PaymentMode},
    dto::output::{
        BranchRevenue, DayRevenue, RevenueReport, RevenueTotals, SalespersonRevenue, StatusCount,
    },
    repository::Ticket,
};
use std::collections::BTreeMap;
use time::{Date, UtcOffset};
use uuid::Uuid;

const STATUSES: [AuditStatus; 4] = [
    AuditStatus::Pending,
    AuditStatus::Approved,
    AuditStatus::Rejected,
    AuditStatus::Voided,
];

impl RevenueTotals {
    fn add(&mut self, ticket: &Ticket) -> Result<(), AmountOverflow> {
        let total_amount = checked_add(self.total_amount, ticket.amount)?;
        match PaymentMode::effective(ticket.payment_mode) {
            PaymentMode::Cash => self.cash_amount = checked_add(self.cash_amount, ticket.amount)?,
            PaymentMode::Bank => self.bank_amount = checked_add(self.bank_amount, ticket.amount)?,
        }
        self.total_amount = total_amount;
        self.ticket_count += 1;

        Ok(())
    }
}

///
/// Totals of tickets that count as revenue
///
pub fn revenue_totals<'a>(
    tickets: impl IntoIterator<Item = &'a Ticket>,
) -> Result<RevenueTotals, AmountOverflow> {
    let mut totals = RevenueTotals::default();
    for ticket in tickets.into_iter().filter(|ticket| counts_as_revenue(ticket)) {
        totals.add(ticket)?;
    }

    Ok(totals)
}

///
/// Aggregates fetched tickets.
///
/// Voided tickets only show up in status counts.
/// Tickets without payment mode are added to cash and counted as data quality warning.
/// Days are calendar days in UTC.
///
/// ### Errors
/// - [AmountOverflow] when any total does not fit in decimal
///
pub fn revenue_report(tickets: &[Ticket]) -> Result<RevenueReport, AmountOverflow> {
    let mut totals = RevenueTotals::default();
    let mut by_branch = BTreeMap::<&str, RevenueTotals>::new();
    let mut by_salesperson = BTreeMap::<Uuid, (&str, RevenueTotals)>::new();
    let mut by_day = BTreeMap::<Date, RevenueTotals>::new();

    for ticket in tickets.iter().filter(|ticket| counts_as_revenue(ticket)) {
        totals.add(ticket)?;
        by_branch.entry(ticket.branch.as_str()).or_default().add(ticket)?;
        by_salesperson
            .entry(ticket.issued_by)
            .or_insert_with(|| (ticket.issued_by_name.as_str(), RevenueTotals::default()))
            .1
            .add(ticket)?;
        by_day.entry(utc_day(ticket)).or_default().add(ticket)?;
    }

    let status_counts = STATUSES
        .iter()
        .map(|status| StatusCount {
            audit_status: *status,
            count: tickets
                .iter()
                .filter(|ticket| ticket.audit_status == *status)
                .count() as u64,
        })
        .collect();
    let missing_payment_mode_count = tickets
        .iter()
        .filter(|ticket| ticket.payment_mode.is_none())
        .count() as u64;

    let by_branch = by_branch
        .into_iter()
        .map(|(branch, totals)| BranchRevenue {
            branch: branch.to_string(),
            totals,
        })
        .collect();

    let mut by_salesperson = by_salesperson
        .into_iter()
        .map(|(issued_by, (issued_by_name, totals))| SalespersonRevenue {
            issued_by,
            issued_by_name: issued_by_name.to_string(),
            totals,
        })
        .collect::<Vec<_>>();
    by_salesperson.sort_by(|a, b| b.totals.total_amount.cmp(&a.totals.total_amount));

    let by_day = by_day
        .into_iter()
        .map(|(day, totals)| DayRevenue {
            day: format_day(day),
            totals,
        })
        .collect();

    Ok(RevenueReport {
        totals,
        status_counts,
        missing_payment_mode_count,
        by_branch,
        by_salesperson,
        by_day,
    })
}

fn counts_as_revenue(ticket: &Ticket) -> bool {
    ticket.audit_status != AuditStatus::Voided
}

fn utc_day(ticket: &Ticket) -> Date {
    ticket.created_at.to_offset(UtcOffset::UTC).date()
}

fn format_day(day: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        day.year(),
        u8::from(day.month()),
        day.day()
    )
}
