mod afro_sms_service;
mod dto;
mod error;
mod sms_service;

pub use afro_sms_service::*;
pub use dto::{AfroSmsServiceConfig, SmsDelivery};
pub use error::*;
pub use sms_service::*;
