//! SQLite store handle and table DDL. The store is opened once at startup and cloned into
//! every service; all clones share one connection pool.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub url: String,
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, max_connections: u32) -> Self {
        StoreConfig {
            url: url.into(),
            max_connections,
        }
    }

    /// Private in-memory database. Limited to one connection, since every SQLite
    /// connection to `:memory:` sees its own database.
    pub fn in_memory() -> Self {
        StoreConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        }
    }

    fn is_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the pool, creating the database file if missing. Foreign keys are enforced on
    /// every connection.
    pub async fn open(config: &StoreConfig) -> Result<Self, AppError> {
        tracing::info!(url = %config.url, "opening store");
        let mut opts = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);
        if !config.is_memory() {
            opts = opts.journal_mode(SqliteJournalMode::Wal);
        }

        let mut pool_opts = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(30));
        if config.is_memory() {
            // Dropping the last connection drops the database.
            pool_opts = pool_opts
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }
        let pool = pool_opts.connect_with(opts).await?;
        Ok(Store { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// True when the store answers a trivial query.
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await.is_ok()
    }

    pub async fn close(&self) {
        tracing::info!("closing store");
        self.pool.close().await;
    }
}

const TABLES: &[(&str, &str)] = &[
    (
        "books",
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL
        )
        "#,
    ),
    (
        "inventory",
        r#"
        CREATE TABLE IF NOT EXISTS inventory (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            book_id INTEGER NOT NULL UNIQUE REFERENCES books (id),
            quantity INTEGER NOT NULL DEFAULT 0
        )
        "#,
    ),
    (
        "sales",
        r#"
        CREATE TABLE IF NOT EXISTS sales (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            total REAL NOT NULL
        )
        "#,
    ),
    (
        "customer_orders",
        r#"
        CREATE TABLE IF NOT EXISTS customer_orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_name TEXT NOT NULL,
            date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending'
        )
        "#,
    ),
    (
        "supplier_orders",
        r#"
        CREATE TABLE IF NOT EXISTS supplier_orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            supplier_name TEXT NOT NULL,
            date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending'
        )
        "#,
    ),
];

/// Create every table that does not exist yet. Safe to call on each startup.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for &(name, ddl) in TABLES {
        tracing::debug!(table = name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> Store {
        let store = Store::open(&StoreConfig::in_memory()).await.unwrap();
        ensure_tables(store.pool()).await.unwrap();
        store
    }

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let store = store().await;
        ensure_tables(store.pool()).await.unwrap();

        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN \
             ('books', 'inventory', 'sales', 'customer_orders', 'supplier_orders')",
        )
        .fetch_one(store.pool())
        .await
        .unwrap();
        assert_eq!(count.0, 5);
    }

    #[tokio::test]
    async fn inventory_requires_existing_book() {
        let store = store().await;
        let result = sqlx::query("INSERT INTO inventory (book_id, quantity) VALUES (?, ?)")
            .bind(999_i64)
            .bind(1_i64)
            .execute(store.pool())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn one_inventory_row_per_book() {
        let store = store().await;
        let book_id = sqlx::query("INSERT INTO books (title, author) VALUES ('Dune', 'Herbert')")
            .execute(store.pool())
            .await
            .unwrap()
            .last_insert_rowid();
        sqlx::query("INSERT INTO inventory (book_id) VALUES (?)")
            .bind(book_id)
            .execute(store.pool())
            .await
            .unwrap();
        let second = sqlx::query("INSERT INTO inventory (book_id) VALUES (?)")
            .bind(book_id)
            .execute(store.pool())
            .await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn ping_and_close() {
        let store = store().await;
        assert!(store.ping().await);
        store.close().await;
        assert!(!store.ping().await);
    }
}
