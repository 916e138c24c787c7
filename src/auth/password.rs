use anyhow::Context;

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).context("failed to hash password")
}

///
/// Malformed hashes are treated as a mismatch
///
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match bcrypt::verify(password, password_hash) {
        Ok(matches) => matches,
        Err(err) => {
            tracing::warn!(%err, "invalid password hash");
            false
        }
    }
}
