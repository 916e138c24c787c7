use jsonwebtoken::EncodingKey;
use std::time::Duration;

#[derive(Clone)]
pub struct AuthServiceConfig {
    pub max_failed_login_attempts: u32,
    pub jwt_encoding_key: EncodingKey,

    /// tokens never outlive sessions they belong to
    pub token_lifetime: Duration,
}
