//! Database handle lifecycle
//!
//! The store is a single SQLite file. [`Database::open`] creates the pool
//! and applies the embedded migrations; [`Database::close`] drains it. The
//! handle is cheap to clone and is passed explicitly to every adapter.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::DatabaseError;

/// Type alias for the SQLite connection pool
pub type DatabasePool = SqlitePool;

/// Configuration options for the database connection pool
///
/// # Example
///
/// ```rust
/// use infra_db::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("sqlite://pacific.db")
///     .max_connections(8)
///     .connect_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string, e.g. `sqlite://pacific.db` or `sqlite::memory:`
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Idle timeout before closing a connection
    pub idle_timeout: Duration,
    /// Create the database file if it does not exist
    pub create_if_missing: bool,
    /// Apply embedded migrations on open
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(10 * 60),
            create_if_missing: true,
            run_migrations: true,
        }
    }

    /// Configuration for a private in-memory database
    ///
    /// Every connection to `sqlite::memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never reaped.
    pub fn in_memory() -> Self {
        let mut config = Self::new("sqlite::memory:");
        config.max_connections = 1;
        config.min_connections = 1;
        config
    }

    /// Sets the maximum number of connections in the pool
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections to maintain
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout duration
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the idle timeout before closing a connection
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Whether to apply migrations when opening
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("sqlite://pacific.db")
    }
}

/// Explicit handle to the store
#[derive(Debug, Clone)]
pub struct Database {
    pool: DatabasePool,
}

impl Database {
    /// Opens the pool and, unless disabled, brings the schema up to date
    ///
    /// # Errors
    ///
    /// * `DatabaseError::ConnectionFailed` - the URL is invalid or the file cannot be opened
    /// * `DatabaseError::MigrationFailed` - a migration could not be applied
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use infra_db::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("sqlite://pacific.db")).await?;
    /// // ...
    /// db.close().await;
    /// ```
    pub async fn open(config: DatabaseConfig) -> Result<Self, DatabaseError> {
        info!(
            url = %config.url,
            max_connections = config.max_connections,
            "Opening database"
        );

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?
            .create_if_missing(config.create_if_missing)
            .foreign_keys(true);
        if !config.is_in_memory() {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout);
        if config.is_in_memory() {
            pool_options = pool_options.max_lifetime(None).idle_timeout(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let database = Self { pool };
        if config.run_migrations {
            database.migrate().await?;
        }

        info!("Database ready");
        Ok(database)
    }

    /// Applies the embedded migrations
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Round-trips a trivial query
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Waits for checked-out connections to return, then closes the pool
    pub async fn close(&self) {
        info!("Closing database");
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DatabaseConfig::new("sqlite://test.db")
            .max_connections(8)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(60));

        assert_eq!(config.max_connections, 8);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_in_memory_config() {
        let config = DatabaseConfig::in_memory();
        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 1);
    }

    #[tokio::test]
    async fn test_open_ping_close() {
        let db = Database::open(DatabaseConfig::in_memory()).await.unwrap();
        db.ping().await.unwrap();
        db.close().await;
        assert!(db.is_closed());
        assert!(db.ping().await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let result = Database::open(DatabaseConfig::new("sqlite:///missing-dir/nested/quotes.db")).await;
        assert!(matches!(result, Err(DatabaseError::ConnectionFailed(_))));
    }
}
