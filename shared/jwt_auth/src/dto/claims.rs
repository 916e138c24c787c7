use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,

    /// Server-side session the token belongs to
    pub sid: Uuid,

    pub roles: Vec<String>,
    pub branch: String,
}
