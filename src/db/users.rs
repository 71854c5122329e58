//! `UserStore` over the `users` table.

use async_trait::async_trait;

use super::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};
use crate::store::UserStore;

const SELECT_USER: &str =
    "SELECT id, first_name, last_name, email, password_hash, created_at FROM users";

#[derive(Clone)]
pub struct MySqlUserStore {
    pool: DbPool,
}

impl MySqlUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::UserExists(user.email.clone())
            }
            other => AppError::Db(other),
        })?;

        let id = result.last_insert_id() as i64;
        let row = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}
