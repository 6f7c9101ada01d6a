use sqlx::{Row, SqliteConnection, SqlitePool};

pub async fn mail_exists(pool: &SqlitePool, uid: u32) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT uid FROM mails WHERE uid = ?")
        .bind(uid)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Insert a mail row. The UID is the primary key, so inserting a UID that is
/// already present fails; callers check `mail_exists` first.
pub async fn record_mail(
    conn: &mut SqliteConnection,
    uid: u32,
    subject: Option<&str>,
    observed_at: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO mails (uid, subject, observed_at) VALUES (?, ?, ?)")
        .bind(uid)
        .bind(subject)
        .bind(observed_at)
        .execute(conn)
        .await?;

    Ok(())
}

/// Subject of the mail an address was found in, for payment notifications.
pub async fn mail_subject(pool: &SqlitePool, uid: u32) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query("SELECT subject FROM mails WHERE uid = ?")
        .bind(uid)
        .fetch_optional(pool)
        .await?;

    Ok(row.and_then(|r| r.get("subject")))
}

/// Delete mails observed more than `retention_days` before `now`. Addresses
/// and transactions hanging off them go with the cascade. Returns the number
/// of mail rows removed.
pub async fn prune_mails_older_than(
    pool: &SqlitePool,
    retention_days: u32,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let cutoff = now - i64::from(retention_days) * 86_400;

    let result = sqlx::query("DELETE FROM mails WHERE observed_at < ?")
        .bind(cutoff)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
