use sqlx::SqlitePool;

/// Whether this hash was already recorded for this address row. Scoped to
/// the row, not global: the same hash may legitimately appear for another
/// address.
pub async fn transaction_exists(
    pool: &SqlitePool,
    address_id: i64,
    hash: &str,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT id FROM transactions WHERE address_id = ? AND hash = ?")
        .bind(address_id)
        .bind(hash)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub async fn record_transaction(
    pool: &SqlitePool,
    hash: &str,
    address_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO transactions (hash, address_id) VALUES (?, ?)")
        .bind(hash)
        .bind(address_id)
        .execute(pool)
        .await?;

    Ok(())
}
