use crate::Claims;
use std::{ops::Deref, sync::Arc};
use uuid::Uuid;

///
/// Authenticated user extracted from JWT.
///
/// Fields live behind an Arc so cloning into extensions is cheap.
///
#[derive(Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

pub struct InnerUser {
    pub id: Uuid,
    pub session_id: Uuid,
    pub roles: Vec<String>,
    pub branch: String,
}

impl User {
    pub fn new(id: Uuid, session_id: Uuid, roles: Vec<String>, branch: String) -> Self {
        Self {
            inner: Arc::new(InnerUser {
                id,
                session_id,
                roles,
                branch,
            }),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|user_role| user_role == role)
    }
}

impl From<Claims> for User {
    fn from(claims: Claims) -> Self {
        Self::new(claims.sub, claims.sid, claims.roles, claims.branch)
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
