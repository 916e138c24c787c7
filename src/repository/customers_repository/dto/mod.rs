mod customer;
mod new_customer;

pub use customer::*;
pub use new_customer::*;
