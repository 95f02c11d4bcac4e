//! Explicit store client: pool construction, schema bootstrap, lifecycle.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseSettings;
use crate::error::AppError;

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    price DOUBLE PRECISION NOT NULL,
    availability BOOLEAN NOT NULL DEFAULT TRUE
)
"#;

/// Owns the connection pool. Constructed once at startup, passed down, and
/// closed explicitly on shutdown.
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Build the pool from settings. With `required` set, the connection is
    /// established (and may fail) here; otherwise the pool connects lazily
    /// and a dead database surfaces per request instead.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, AppError> {
        let options = settings.connect_options();
        let pool_options = PgPoolOptions::new().max_connections(5);
        let pool = if settings.required {
            pool_options.connect_with(options).await?
        } else {
            pool_options.connect_lazy_with(options)
        };
        Ok(Self { pool })
    }

    /// Round-trip check against the database.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Idempotent DDL bootstrap for the products table.
    pub async fn sync(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_PRODUCTS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Drop and recreate the products table. Backs the `--clear` reset path.
    pub async fn reset(&self) -> Result<(), AppError> {
        sqlx::query("DROP TABLE IF EXISTS products").execute(&self.pool).await?;
        self.sync().await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
