use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PaymentMode {
    Cash,
    Bank,
}

impl PaymentMode {
    ///
    /// Payment mode used for revenue aggregation.
    /// Tickets with missing mode are counted as cash.
    ///
    pub fn effective(payment_mode: Option<PaymentMode>) -> PaymentMode {
        payment_mode.unwrap_or(PaymentMode::Cash)
    }

    ///
    /// Payment mode inferred for tickets with missing mode.
    /// Presence of bank receipt number means the payment went through a bank.
    ///
    pub fn infer(bank_receipt_number: Option<&str>) -> PaymentMode {
        match bank_receipt_number.map(str::trim) {
            Some(receipt) if !receipt.is_empty() => PaymentMode::Bank,
            _ => PaymentMode::Cash,
        }
    }
}
