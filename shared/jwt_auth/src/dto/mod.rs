mod claims;
mod user;

pub use claims::*;
pub use user::*;
