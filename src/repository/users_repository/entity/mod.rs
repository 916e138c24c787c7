mod user_entity;

pub use user_entity::*;
