//!
//! Business rules that do not depend on storage or transport
//!

mod amount;
mod audit_status;
mod payment_mode;
mod sms_status;
mod ticket_range;

pub use amount::*;
pub use audit_status::*;
pub use payment_mode::*;
pub use sms_status::*;
pub use ticket_range::*;
