mod afro_sms_service_config;
mod sms_delivery;

pub use afro_sms_service_config::*;
pub use sms_delivery::*;
