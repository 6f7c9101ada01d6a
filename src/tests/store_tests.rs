use crate::db;
use crate::tests::support;

#[tokio::test]
async fn mail_ingestion_is_keyed_by_uid() {
    let pool = support::memory_pool().await;

    assert!(!db::mail::mail_exists(&pool, 7).await.unwrap());
    support::seed_mail(&pool, 7, Some("hello"), 1_700_000_000).await;
    assert!(db::mail::mail_exists(&pool, 7).await.unwrap());

    // The primary key rejects a second insert with the same UID.
    let mut conn = pool.acquire().await.unwrap();
    let duplicate = db::mail::record_mail(&mut conn, 7, Some("again"), 1_700_000_001).await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn transaction_recording_is_idempotent_per_address_row() {
    let pool = support::memory_pool().await;
    support::seed_mail(&pool, 1, None, 1_700_000_000).await;
    let first = support::seed_address(&pool, support::KNOWN_ADDRESS, 1).await;
    let second = support::seed_address(&pool, support::KNOWN_ADDRESS, 1).await;

    assert!(!db::transaction::transaction_exists(&pool, first, "abc123").await.unwrap());
    db::transaction::record_transaction(&pool, "abc123", first)
        .await
        .unwrap();
    assert!(db::transaction::transaction_exists(&pool, first, "abc123").await.unwrap());

    // Scoped to the address row: the same hash is still unseen for another row.
    assert!(!db::transaction::transaction_exists(&pool, second, "abc123").await.unwrap());
}

#[tokio::test]
async fn same_value_in_two_mails_yields_two_rows() {
    let pool = support::memory_pool().await;
    support::seed_mail(&pool, 1, Some("first"), 1_700_000_000).await;
    support::seed_mail(&pool, 2, Some("second"), 1_700_000_100).await;
    support::seed_address(&pool, support::KNOWN_ADDRESS, 1).await;
    support::seed_address(&pool, support::KNOWN_ADDRESS, 2).await;

    let addresses = db::address::list_addresses(&pool).await.unwrap();
    assert_eq!(addresses.len(), 2);
    assert_eq!(db::address::count_addresses(&pool).await.unwrap(), 2);
}

#[tokio::test]
async fn prune_cascades_through_addresses_and_transactions() {
    let pool = support::memory_pool().await;
    let now = 1_700_000_000i64;

    support::seed_mail(&pool, 1, Some("old"), now - 40 * 86_400).await;
    let old_address = support::seed_address(&pool, support::KNOWN_ADDRESS, 1).await;
    db::transaction::record_transaction(&pool, "old-tx", old_address)
        .await
        .unwrap();

    support::seed_mail(&pool, 2, Some("fresh"), now - 86_400).await;
    let fresh_address = support::seed_address(&pool, support::KNOWN_ADDRESS, 2).await;
    db::transaction::record_transaction(&pool, "fresh-tx", fresh_address)
        .await
        .unwrap();

    let pruned = db::mail::prune_mails_older_than(&pool, 30, now).await.unwrap();
    assert_eq!(pruned, 1);

    assert!(!db::mail::mail_exists(&pool, 1).await.unwrap());
    assert!(db::mail::mail_exists(&pool, 2).await.unwrap());

    let remaining = db::address::list_addresses(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, fresh_address);

    assert!(!db::transaction::transaction_exists(&pool, old_address, "old-tx").await.unwrap());
    assert!(db::transaction::transaction_exists(&pool, fresh_address, "fresh-tx").await.unwrap());

    let transactions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(transactions, 1);
}

#[tokio::test]
async fn subject_lookup_survives_a_missing_subject() {
    let pool = support::memory_pool().await;
    support::seed_mail(&pool, 9, None, 1_700_000_000).await;

    assert_eq!(db::mail::mail_subject(&pool, 9).await.unwrap(), None);
    assert_eq!(db::mail::mail_subject(&pool, 10).await.unwrap(), None);
}
