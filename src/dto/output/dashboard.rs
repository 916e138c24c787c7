use super::{RevenueTotals, Ticket};
use crate::auth::Role;
use serde::Serialize;

///
/// Summary shown after login. Sales users get numbers of their own tickets only.
///
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub role: Role,
    pub today: RevenueTotals,
    pub this_month: RevenueTotals,
    pub pending_count: u64,
    pub rejected_count: u64,
    pub missing_payment_mode_count: u64,
    pub recent_tickets: Vec<Ticket>,
}
