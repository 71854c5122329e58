use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::UserStore;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};

#[derive(Default)]
struct Inner {
    next_id: i64,
    by_email: HashMap<String, User>,
}

/// Process-local store keyed by lowercased email, matching the
/// case-insensitive collation MySQL applies to the unique email key.
/// Ids start at 1.
#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.by_email.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let key = email.to_lowercase();
        Ok(self.inner.read().await.by_email.get(&key).cloned())
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let key = user.email.to_lowercase();
        let mut inner = self.inner.write().await;
        if inner.by_email.contains_key(&key) {
            return Err(AppError::UserExists(user.email));
        }
        inner.next_id += 1;
        let row = User {
            id: inner.next_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        inner.by_email.insert(key, row.clone());
        Ok(row)
    }
}
