use crate::db;
use crate::mail::client::MailboxClient;
use crate::mail::{parser, MailError};
use crate::notify::Notifier;
use crate::state::AppState;
use crate::validation;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct ScanSummary {
    pub processed: u32,
    pub skipped: u32,
    pub addresses_found: u32,
}

/// Walk the configured mailbox and ingest every message not seen before.
/// Any IMAP failure aborts the whole scan; the mailbox is closed and logged
/// out of on the way through.
pub async fn scan(state: &AppState, notifier: &dyn Notifier) -> Result<ScanSummary, MailError> {
    let mut client = MailboxClient::connect(&state.config).await?;
    let seqs = client.list_all().await?;
    debug!("mailbox holds {} messages", seqs.len());

    let mut summary = ScanSummary::default();
    for seq in seqs {
        let uid = client.resolve_uid(seq).await?;
        if db::mail::mail_exists(&state.db_pool, uid).await? {
            debug!("mail UID {uid} was already processed");
            summary.skipped += 1;
            continue;
        }

        let raw = client.fetch_message(seq).await?;
        let content = parser::parse_message(&raw)?;

        info!("processing mail UID {uid}");
        let found = ingest_message(
            &state.db_pool,
            notifier,
            uid,
            content.subject.as_deref(),
            &content.body,
            Utc::now().timestamp(),
        )
        .await?;

        summary.processed += 1;
        summary.addresses_found += found.len() as u32;
    }

    client.disconnect().await?;
    Ok(summary)
}

/// Record one mail together with the checksum-valid addresses found in its
/// body. The mail row and its addresses commit as a single unit, so a crash
/// can lose at most this one message. A UID that is already present is a
/// no-op: ingestion is idempotent per mail.
pub async fn ingest_message(
    pool: &SqlitePool,
    notifier: &dyn Notifier,
    uid: u32,
    subject: Option<&str>,
    body: &str,
    observed_at: i64,
) -> Result<Vec<String>, MailError> {
    if db::mail::mail_exists(pool, uid).await? {
        debug!("mail UID {uid} was already processed");
        return Ok(Vec::new());
    }

    let found = validation::extract_addresses(body);

    let mut tx = pool.begin().await?;
    db::mail::record_mail(&mut tx, uid, subject, observed_at).await?;
    for address in &found {
        db::address::record_address(&mut tx, address, uid).await?;
    }
    tx.commit().await?;

    for address in &found {
        info!("found address {address} in mail UID {uid}");
        notifier
            .send_info(&format!("Found bitcoin address {address}"))
            .await?;
    }

    Ok(found)
}
