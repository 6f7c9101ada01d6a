use crate::notify::Notifier;
use crate::service;
use crate::state::AppState;
use chrono::{DateTime, Duration as ChronoDuration, NaiveTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, sleep, Instant};
use tokio_util::sync::CancellationToken;
use tracing::info;

const DEBUG_INTERVAL: Duration = Duration::from_secs(60);

/// Drive the job on its cadence until cancelled: once per day at the
/// configured UTC hour, or every minute in debug mode. Invocations are
/// serialized by construction; a new tick waits for the previous job.
pub async fn run(
    state: Arc<AppState>,
    notifier: Arc<dyn Notifier>,
    debug: bool,
    shutdown: CancellationToken,
) {
    if debug {
        info!(
            "debug mode: running the job every {} seconds",
            DEBUG_INTERVAL.as_secs()
        );
        let mut ticker = interval_at(Instant::now() + DEBUG_INTERVAL, DEBUG_INTERVAL);
        loop {
            tokio::select! {
                _ = ticker.tick() => service::run_job(&state, notifier.as_ref()).await,
                _ = shutdown.cancelled() => break,
            }
        }
    } else {
        loop {
            let wait = time_until_next_run(Utc::now(), state.config.daily_run_hour);
            info!("next job scheduled in {} seconds", wait.as_secs());
            tokio::select! {
                _ = sleep(wait) => service::run_job(&state, notifier.as_ref()).await,
                _ = shutdown.cancelled() => break,
            }
        }
    }

    info!("scheduler stopped");
}

/// Delay until the next occurrence of `hour:00:00` UTC, strictly in the
/// future.
fn time_until_next_run(now: DateTime<Utc>, hour: u32) -> Duration {
    let at = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    let today = now.date_naive().and_time(at);

    let next = if now.naive_utc() < today {
        today
    } else {
        today + ChronoDuration::days(1)
    };

    (next - now.naive_utc())
        .to_std()
        .unwrap_or(Duration::from_secs(60))
}
