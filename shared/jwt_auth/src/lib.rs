//!
//! Bearer JWT authentication shared by Receipt Rocket services.
//!
//! Tokens are HS256 signed with a single shared secret. [JwtAuthLayer]
//! validates them and stores [User] in request extensions.
//!

pub mod dto;
pub mod error;
pub mod functions;
pub mod middleware;
pub mod util;


pub use dto::{Claims, User};
pub use functions::*;
pub use middleware::JwtAuthLayer;
