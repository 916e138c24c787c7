use super::{Customer, Ticket};
use rust_decimal::Decimal;
use serde::Serialize;

///
/// Customer with tickets issued for them, newest first
///
#[derive(Debug, Serialize)]
pub struct CustomerHistory {
    pub customer: Customer,
    pub tickets: Vec<Ticket>,

    /// sum of all tickets except voided ones
    pub total_amount: Decimal,
}
