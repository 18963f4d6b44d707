//! Database initialization.
use crate::db::{DatabaseConnection, DatabaseKind, Db as _};
use std::env;

/// Connects to a database and makes sure the schema exists.
/// We use `SQLite` by default, but we can override this by setting the
/// `DATABASE_URL` environment variable.
///
/// # Errors
/// Errors if connection to database fails.
/// Connections can fail if the database is not running, or if the database URL is invalid.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let db_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://recapp.sqlite3?mode=rwc".into());
    let connection = DatabaseConnection::connect(&db_url).await?;
    tracing::info!("Connected to database");
    ensure_schema(&connection).await?;
    Ok(connection)
}

/// Create the question table if this is a fresh database.
///
/// # Errors
/// Errors if the schema statement cannot be executed.
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statement = match conn.kind {
        DatabaseKind::Sqlite => {
            "
        CREATE TABLE IF NOT EXISTS question (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            text TEXT NOT NULL,
            repo TEXT NOT NULL,
            live TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
    "
        }
    };
    let mut connection = conn.pool.acquire().await?;
    sqlx::query(statement).execute(&mut *connection).await?;
    Ok(())
}
