use std::time::Duration;

#[derive(Clone)]
pub struct AfroSmsServiceConfig {
    pub api_url: String,
    pub api_key: String,
    pub sender_name: String,

    /// registered sender identifier, provider default when missing
    pub identifier_id: Option<String>,
    pub timeout: Duration,
}
