use crate::{error::MissingRoleError, User};

///
/// Validates that user has at least one of the roles.
///
/// ### Errors
/// - [MissingRoleError] when user has none of the roles
///
pub fn require_any_role(user: &User, roles: &[&str]) -> Result<(), MissingRoleError> {
    if roles.iter().any(|role| user.has_role(role)) {
        return Ok(());
    }

    Err(MissingRoleError {
        missing_role: roles.join("|"),
    })
}
