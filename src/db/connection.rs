use crate::db::INIT_SCHEMA;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

/// Open (creating if needed) the store and apply the schema. Foreign keys
/// are enabled per connection; without them the ON DELETE CASCADE clauses
/// are inert.
pub async fn establish_connection(database_url: &str) -> Result<Pool<Sqlite>, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    // Initialize schema
    sqlx::query(INIT_SCHEMA).execute(&pool).await?;

    Ok(pool)
}
