mod customer;
mod login;
mod pagination;
mod report_filters;
mod ticket;
mod user;

pub use customer::*;
pub use login::*;
pub use pagination::*;
pub use report_filters::*;
pub use ticket::*;
pub use user::*;
