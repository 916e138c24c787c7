mod sms_log_entity;

pub use sms_log_entity::*;
