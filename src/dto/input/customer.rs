use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CustomerCreate {
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub member_number: Option<String>,
    pub address: Option<String>,

    /// branch of registering user when missing
    pub branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomerUpdate {
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub member_number: Option<String>,
    pub address: Option<String>,
    pub branch: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerFilters {
    /// matches name, phone or member number
    pub search: Option<String>,
    pub branch: Option<String>,
    pub is_active: Option<bool>,
}
