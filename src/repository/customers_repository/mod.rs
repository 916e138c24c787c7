mod customers_repository;
mod customers_repository_impl;
mod dto;
mod entity;

pub use customers_repository::*;
pub use customers_repository_impl::*;
pub use dto::*;
