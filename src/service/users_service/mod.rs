mod dto;
mod users_service;
mod users_service_impl;

pub use users_service::*;
pub use users_service_impl::*;
