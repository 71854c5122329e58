//! Entry point: load config, wire dependencies, and run the server.

use anyhow::Context;
use ecom::config::Config;
use ecom::db::{self, MySqlUserStore};
use ecom::{create_app, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = db::create_pool(&config.database_url())
        .await
        .context("connect to database")?;
    db::run_migrations(&db_pool)
        .await
        .context("run migrations")?;
    let store = Arc::new(MySqlUserStore::new(db_pool));

    let addr = config.listen_addr();
    let state = AppState::new(config, store);
    let app = create_app(state.clone());

    tracing::info!(
        addr = %addr,
        public_host = %state.config().public_host,
        "listening"
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
