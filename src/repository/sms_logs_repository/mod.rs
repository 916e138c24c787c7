mod dto;
mod entity;
mod sms_logs_repository;
mod sms_logs_repository_impl;

pub use dto::*;
pub use sms_logs_repository::*;
pub use sms_logs_repository_impl::*;
