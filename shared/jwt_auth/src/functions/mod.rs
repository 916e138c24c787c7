mod require_any_role;

pub use require_any_role::*;
