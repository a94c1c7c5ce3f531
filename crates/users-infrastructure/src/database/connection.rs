//! Database connection pool

use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use users_shared::config::DatabaseSettings;

/// Builds the pool without connecting; connections are opened on first use.
pub fn create_pool(settings: &DatabaseSettings) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout())
        .connect_lazy(&settings.url)
}

pub async fn verify_connection(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
