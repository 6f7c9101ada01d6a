use crate::models::TrackedAddress;
use sqlx::{Row, SqliteConnection, SqlitePool};

pub async fn record_address(
    conn: &mut SqliteConnection,
    address: &str,
    mail_uid: u32,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO addresses (address, mail_id) VALUES (?, ?)")
        .bind(address)
        .bind(mail_uid)
        .execute(conn)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn list_addresses(pool: &SqlitePool) -> Result<Vec<TrackedAddress>, sqlx::Error> {
    let rows = sqlx::query("SELECT id, address, mail_id FROM addresses ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| TrackedAddress {
            id: row.get("id"),
            address: row.get("address"),
            mail_uid: row.get("mail_id"),
        })
        .collect())
}

pub async fn count_addresses(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
