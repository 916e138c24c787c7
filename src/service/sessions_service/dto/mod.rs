mod session;
mod sessions_service_config;

pub use session::*;
pub use sessions_service_config::*;
