use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataQuality {
    pub missing_payment_mode_count: u64,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DataQualityFix {
    pub set_to_bank: u64,
    pub set_to_cash: u64,
    pub fixed: u64,
}
