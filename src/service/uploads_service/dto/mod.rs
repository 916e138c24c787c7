mod upload_kind;
mod uploads_service_config;

pub use upload_kind::*;
pub use uploads_service_config::*;
