use anyhow::Result;
use argon2::{Argon2, PasswordVerifier, password_hash::PasswordHash};

/// Ok(false) is a clean mismatch; Err means the stored hash could not be
/// parsed or verification itself failed.
pub async fn verify_pw(password: &str, expected_hash: &str) -> Result<bool> {
    let password = password.to_owned();
    let expected_hash = expected_hash.to_owned();
    tokio::task::spawn_blocking(move || {
        let argon2 = Argon2::default();
        let parsed_hash =
            PasswordHash::new(&expected_hash).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(anyhow::anyhow!(e.to_string())),
        }
    })
    .await?
}
