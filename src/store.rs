//! Connection bootstrap and `person` table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const PERSON_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS person (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT UNIQUE,
        phone TEXT UNIQUE,
        firstName TEXT UNIQUE NOT NULL,
        lastName TEXT UNIQUE NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS person_firstName ON person(firstName)",
    "CREATE INDEX IF NOT EXISTS person_lastName ON person(lastName)",
];

/// Open a pool for `database_url`, creating the database file if it does not exist.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the person table and its name indexes if they do not exist yet.
pub async fn ensure_person_table(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in PERSON_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Single-connection in-memory database with the schema applied.
/// Every connection to `sqlite::memory:` is a fresh database, so the pool
/// must never open a second one or recycle the first.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ensure_person_table(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_person_table_is_idempotent() {
        let pool = memory_pool().await;
        ensure_person_table(&pool).await.unwrap();

        let indexes: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'person_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<&str> = indexes.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(names, ["person_firstName", "person_lastName"]);
    }
}
