mod dto;
mod receipt_renderer;
mod tickets_service;
mod tickets_service_impl;

pub use dto::TicketsServiceConfig;
pub use receipt_renderer::format_amount;
pub use tickets_service::*;
pub use tickets_service_impl::*;
