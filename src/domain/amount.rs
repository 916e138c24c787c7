use rust_decimal::Decimal;

/// Largest amount a single ticket may carry
pub const MAX_TICKET_AMOUNT: i64 = 1_000_000_000_000;

/// Amounts are kept with at most cents
pub const MAX_AMOUNT_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("amount total out of range")]
pub struct AmountOverflow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount must be greater than 0")]
    NotPositive,

    #[error("amount is too large")]
    TooLarge,

    #[error("amount can have at most 2 decimal places")]
    TooPrecise,
}

pub fn validate_ticket_amount(amount: Decimal) -> Result<(), AmountError> {
    if amount <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }
    if amount > Decimal::from(MAX_TICKET_AMOUNT) {
        return Err(AmountError::TooLarge);
    }
    // trailing zeros do not count
    if amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(AmountError::TooPrecise);
    }

    Ok(())
}

pub fn checked_add(sum: Decimal, amount: Decimal) -> Result<Decimal, AmountOverflow> {
    sum.checked_add(amount).ok_or(AmountOverflow)
}

pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal, AmountOverflow> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, checked_add)
}
