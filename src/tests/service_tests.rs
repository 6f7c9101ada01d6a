use crate::service;
use crate::tests::support::{self, RecordingNotifier, KNOWN_ADDRESS};

#[tokio::test]
async fn guard_is_quiet_below_the_ceiling() {
    let pool = support::memory_pool().await;
    let notifier = RecordingNotifier::default();
    support::seed_mail(&pool, 1, None, 1_700_000_000).await;
    support::seed_address(&pool, KNOWN_ADDRESS, 1).await;
    support::seed_address(&pool, KNOWN_ADDRESS, 1).await;

    let skipped = service::enforce_address_guard(&pool, &notifier, 5)
        .await
        .unwrap();

    assert!(!skipped);
    assert!(notifier.info.lock().unwrap().is_empty());
}

#[tokio::test]
async fn guard_skips_and_notifies_once_above_the_ceiling() {
    let pool = support::memory_pool().await;
    let notifier = RecordingNotifier::default();
    support::seed_mail(&pool, 1, None, 1_700_000_000).await;
    for _ in 0..3 {
        support::seed_address(&pool, KNOWN_ADDRESS, 1).await;
    }

    let skipped = service::enforce_address_guard(&pool, &notifier, 2)
        .await
        .unwrap();

    assert!(skipped);
    assert_eq!(notifier.info.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn guard_allows_a_count_exactly_at_the_ceiling() {
    let pool = support::memory_pool().await;
    let notifier = RecordingNotifier::default();
    support::seed_mail(&pool, 1, None, 1_700_000_000).await;
    for _ in 0..2 {
        support::seed_address(&pool, KNOWN_ADDRESS, 1).await;
    }

    let skipped = service::enforce_address_guard(&pool, &notifier, 2)
        .await
        .unwrap();

    assert!(!skipped);
}
