mod reports_service;
mod reports_service_impl;
mod revenue_report;

pub use reports_service::*;
pub use reports_service_impl::*;
pub use revenue_report::*;
