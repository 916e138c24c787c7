mod dto;
mod sessions_service;
mod sessions_service_garbage_collector;
mod sessions_service_impl;

pub use dto::SessionsServiceConfig;
pub use sessions_service::*;
pub use sessions_service_garbage_collector::*;
pub use sessions_service_impl::*;
