use crate::db;
use crate::explorer::client::ExplorerClient;
use crate::explorer::models::{AddressData, TransactionEntry};
use crate::explorer::ExplorerError;
use crate::models::TrackedAddress;
use crate::notify::Notifier;
use crate::state::AppState;
use sqlx::SqlitePool;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct FetchSummary {
    pub addresses_checked: u32,
    pub new_transactions: u32,
}

/// Query the explorer for every stored address and record transactions not
/// seen before. A fixed delay before each request keeps the service inside
/// the explorer's rate budget. Any HTTP or decoding failure aborts the
/// whole pass.
pub async fn fetch(state: &AppState, notifier: &dyn Notifier) -> Result<FetchSummary, ExplorerError> {
    let client = ExplorerClient::new(&state.config)?;
    let tracked = db::address::list_addresses(&state.db_pool).await?;

    let mut summary = FetchSummary::default();
    for entry in tracked {
        tokio::time::sleep(state.config.explorer_throttle).await;
        debug!("checking transactions for address {}", entry.address);

        let dashboard = client.address_dashboard(&entry.address).await?;
        let data = dashboard
            .data
            .get(entry.address.as_str())
            .ok_or_else(|| ExplorerError::MissingAddress(entry.address.clone()))?;

        summary.new_transactions += record_new_transactions(
            &state.db_pool,
            notifier,
            &entry,
            data,
            dashboard.context.market_price_usd,
        )
        .await?;
        summary.addresses_checked += 1;
    }

    Ok(summary)
}

/// Record the transactions of one dashboard that are new for this address
/// row, committing each one as it lands. A positive balance change is a
/// payment: the originating mail's subject is looked up and the operators
/// are notified. Replaying the same dashboard inserts and notifies nothing.
pub async fn record_new_transactions(
    pool: &SqlitePool,
    notifier: &dyn Notifier,
    entry: &TrackedAddress,
    data: &AddressData,
    market_price_usd: f64,
) -> Result<u32, ExplorerError> {
    let mut new = 0;
    for tx in &data.transactions {
        if db::transaction::transaction_exists(pool, entry.id, &tx.hash).await? {
            debug!("transaction {} already known", tx.hash);
            continue;
        }

        db::transaction::record_transaction(pool, &tx.hash, entry.id).await?;
        new += 1;
        info!(
            "found new transaction {} for address {}: balance change {} satoshis",
            tx.hash, entry.address, tx.balance_change
        );

        if tx.balance_change > 0 {
            let subject = db::mail::mail_subject(pool, entry.mail_uid)
                .await?
                .unwrap_or_default();
            notifier
                .send_payment(&payment_message(tx, market_price_usd, &subject))
                .await?;
        }
    }

    Ok(new)
}

fn payment_message(tx: &TransactionEntry, market_price_usd: f64, subject: &str) -> String {
    let btc = tx.amount_btc();
    format!(
        "💰 Someone paid! 💸\nTransaction hash: {}\nAmount: {} BTC / {:.2} USD\nMail subject: {}",
        tx.hash,
        btc,
        btc * market_price_usd,
        subject
    )
}
