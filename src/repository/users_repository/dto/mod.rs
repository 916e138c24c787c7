mod new_user;
mod user;

pub use new_user::*;
pub use user::*;
