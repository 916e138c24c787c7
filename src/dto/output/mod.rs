mod csv_export;
mod customer;
mod customer_history;
mod dashboard;
mod data_quality;
mod login;
mod revenue_report;
mod sms_log;
mod ticket;
mod upload;
mod user;

pub use csv_export::*;
pub use customer::*;
pub use customer_history::*;
pub use dashboard::*;
pub use data_quality::*;
pub use login::*;
pub use revenue_report::*;
pub use sms_log::*;
pub use ticket::*;
pub use upload::*;
pub use user::*;
