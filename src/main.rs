use clap::Parser;
use payment_watcher::config::Config;
use payment_watcher::notify::{Notifier, TelegramNotifier};
use payment_watcher::state::AppState;
use payment_watcher::{bot, db, scheduler};
use std::sync::Arc;
use teloxide::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(about = "Watches a mailbox for Bitcoin addresses and reports payments over Telegram")]
struct Cli {
    /// Run the job every minute instead of once a day.
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting payment-watcher");

    // Load configuration
    let config = Config::from_env();

    // Setup database connection
    let db_pool = db::connection::establish_connection(&config.database_url).await?;
    tracing::info!("database ready at {}", config.database_url);

    let bot = Bot::new(config.telegram_bot_token.clone());
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(bot.clone(), &config));
    let state = Arc::new(AppState { config, db_pool });

    // Start the scheduled job loop
    let shutdown = CancellationToken::new();
    let scheduler_handle = tokio::spawn(scheduler::run(
        state,
        notifier,
        cli.debug,
        shutdown.clone(),
    ));

    // Serve bot commands until interrupted
    tokio::select! {
        _ = bot::run_commands(bot) => {},
        _ = tokio::signal::ctrl_c() => tracing::info!("shutting down"),
    }

    shutdown.cancel();
    let _ = scheduler_handle.await;

    Ok(())
}
