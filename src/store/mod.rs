//! User persistence capability consumed by the auth handlers.

mod memory;

pub use memory::InMemoryUserStore;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{NewUser, User};

/// Lookup and creation of users.
///
/// Implementations must enforce email uniqueness on `create_user` and
/// report a duplicate as `AppError::UserExists`: the register handler's
/// lookup-then-create sequence is not atomic on its own. Emails compare
/// case-insensitively, as under MySQL's default collation.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn create_user(&self, user: NewUser) -> AppResult<User>;
}
