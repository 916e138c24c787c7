use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct SessionsServiceConfig {
    pub inactivity_timeout: Duration,
    pub max_lifetime: Duration,
    pub garbage_collector_interval: Duration,
}
