mod customers_service;
mod customers_service_impl;
mod dto;

pub use customers_service::*;
pub use customers_service_impl::*;
