//! Database layer: MySQL pool, migrations and the user store backed by them.

mod pool;
mod users;

pub use pool::{create_pool, run_migrations, DbPool};
pub use users::MySqlUserStore;
