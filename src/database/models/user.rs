use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Argon2id PHC string, never the plaintext.
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

/// Insert payload for the `users` table.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
}
