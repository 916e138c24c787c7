use crate::Claims;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

pub const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

///
/// Keys used to sign and verify tokens.
/// Both are derived from the same shared secret.
///
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

pub fn create_validation() -> Validation {
    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.leeway = 0;

    validation
}

pub fn encode_jwt(claims: &Claims, key: &EncodingKey) -> jsonwebtoken::errors::Result<String> {
    jsonwebtoken::encode(&Header::new(JWT_ALGORITHM), claims, key)
}
