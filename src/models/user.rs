use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered user as held by the store.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input to `UserStore::create_user`. Carries the hash, never the plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}
