mod customer_find_entity;
mod customer_insert_entity;

pub use customer_find_entity::*;
pub use customer_insert_entity::*;
