//!
//! All roles used within application
//!

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Superadmin,
    Admin,
    Sales,
    Auditor,
    Operation,
}

impl Role {
    pub const MANAGERS: &'static [Role] = &[Role::Superadmin, Role::Admin];

    ///
    /// Roles allowed to read tickets, customers and reports
    ///
    pub const STAFF: &'static [Role] = &[
        Role::Superadmin,
        Role::Admin,
        Role::Sales,
        Role::Auditor,
        Role::Operation,
    ];

    ///
    /// Role that may create or modify users with the given role
    ///
    pub fn can_manage(self, other: Role) -> bool {
        match self {
            Role::Superadmin => true,
            Role::Admin => other != Role::Superadmin,
            _ => false,
        }
    }
}
