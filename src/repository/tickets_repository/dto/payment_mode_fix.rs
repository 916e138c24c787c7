#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentModeFix {
    pub set_to_bank: u64,
    pub set_to_cash: u64,
}
