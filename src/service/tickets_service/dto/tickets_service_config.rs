#[derive(Debug, Clone)]
pub struct TicketsServiceConfig {
    /// base of receipt links sent to customers
    pub public_url: String,
    pub organization_name: String,
}
