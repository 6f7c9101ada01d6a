use crate::db;
use crate::explorer::{self, ExplorerError};
use crate::mail::{self, MailError};
use crate::notify::{Notifier, NotifyError};
use crate::state::AppState;
use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum JobError {
    #[error("mail scan failed: {0}")]
    Mail(#[from] MailError),

    #[error("transaction lookup failed: {0}")]
    Explorer(#[from] ExplorerError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("notification failed: {0}")]
    Notify(#[from] NotifyError),
}

/// One scheduled invocation. Errors never escape: whatever goes wrong is
/// reported to the info channel and logged, and the process keeps waiting
/// for the next tick.
pub async fn run_job(state: &AppState, notifier: &dyn Notifier) {
    info!("starting scheduled job");

    if let Err(err) = run(state, notifier).await {
        let message = format!("Error while running scheduled job: {err}");
        error!("{message}");
        if let Err(notify_err) = notifier.send_info(&message).await {
            error!("failed to report job error: {notify_err}");
        }
    }
}

async fn run(state: &AppState, notifier: &dyn Notifier) -> Result<(), JobError> {
    let pruned = db::mail::prune_mails_older_than(
        &state.db_pool,
        state.config.mail_retention_days,
        Utc::now().timestamp(),
    )
    .await?;
    if pruned > 0 {
        info!("pruned {pruned} expired mails");
    }

    let scan = mail::scanner::scan(state, notifier).await?;
    info!(
        "scan finished: {} new mails, {} already known, {} addresses found",
        scan.processed, scan.skipped, scan.addresses_found
    );

    if enforce_address_guard(&state.db_pool, notifier, state.config.address_limit).await? {
        return Ok(());
    }

    let fetch = explorer::fetcher::fetch(state, notifier).await?;
    info!(
        "transaction lookup finished: {} addresses checked, {} new transactions",
        fetch.addresses_checked, fetch.new_transactions
    );

    Ok(())
}

/// Skip the transaction-fetch phase once the stored address count crosses
/// the configured ceiling, notifying the operators once. The count is
/// cumulative over everything the store still holds, not per run.
pub async fn enforce_address_guard(
    pool: &SqlitePool,
    notifier: &dyn Notifier,
    limit: i64,
) -> Result<bool, JobError> {
    let count = db::address::count_addresses(pool).await?;
    if count > limit {
        warn!("{count} tracked addresses exceed the ceiling of {limit}, skipping transaction lookups");
        notifier
            .send_info("Too many addresses, I won't look up transactions to avoid hitting the rate limit.")
            .await?;
        return Ok(true);
    }

    Ok(false)
}
