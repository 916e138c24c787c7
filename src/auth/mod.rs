mod password;
mod role;

pub use jwt_auth::User;
pub use password::*;
pub use role::*;

use jwt_auth::error::MissingRoleError;

///
/// Validates that user has at least one of the roles.
///
/// ### Errors
/// - [MissingRoleError] when user has none of them
///
pub fn require_any_role(user: &User, roles: &[Role]) -> Result<(), MissingRoleError> {
    let roles = roles.iter().map(|role| role.as_ref()).collect::<Vec<&str>>();

    jwt_auth::require_any_role(user, &roles)
}

pub fn is_sales_only(user: &User) -> bool {
    user.has_role(Role::Sales.as_ref())
        && !Role::MANAGERS
            .iter()
            .any(|role| user.has_role(role.as_ref()))
}

#[cfg(test)]
mod test {
    use super::*;
    use uuid::Uuid;

    fn user(roles: &[Role]) -> User {
        User::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            roles.iter().map(|role| role.as_ref().to_string()).collect(),
            "mbezi".to_string(),
        )
    }

    #[test]
    fn require_any_role_user_has_role() {
        let result = require_any_role(&user(&[Role::Auditor]), &[Role::Admin, Role::Auditor]);

        assert!(result.is_ok());
    }

    #[test]
    fn require_any_role_user_does_not_have_role() {
        let result = require_any_role(&user(&[Role::Sales]), Role::MANAGERS);

        assert!(result.is_err());
    }

    #[test]
    fn sales_only() {
        assert!(is_sales_only(&user(&[Role::Sales])));
        assert!(!is_sales_only(&user(&[Role::Sales, Role::Admin])));
        assert!(!is_sales_only(&user(&[Role::Auditor])));
    }
}
