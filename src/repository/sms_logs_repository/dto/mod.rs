mod new_sms_log;
mod sms_log;

pub use new_sms_log::*;
pub use sms_log::*;
