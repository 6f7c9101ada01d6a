use dotenv::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub imap_host: String,
    pub imap_port: u16,
    pub imap_username: String,
    pub imap_password: String,
    pub imap_mailbox: String,
    pub telegram_bot_token: String,
    pub telegram_info_chat_id: i64,
    pub telegram_notification_chat_id: i64,
    pub mail_retention_days: u32,
    pub address_limit: i64,
    pub explorer_url: String,
    pub explorer_timeout: Duration,
    pub explorer_throttle: Duration,
    pub daily_run_hour: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:watcher.db".to_string());
        let imap_host = env::var("IMAP_HOST").unwrap_or_default();
        let imap_port = env::var("IMAP_PORT")
            .unwrap_or_else(|_| "993".to_string())
            .parse()
            .unwrap_or(993);
        let imap_username = env::var("IMAP_USERNAME").unwrap_or_default();
        let imap_password = env::var("IMAP_PASSWORD").unwrap_or_default();
        let imap_mailbox = env::var("IMAP_MAILBOX").unwrap_or_else(|_| "INBOX".to_string());
        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        let telegram_info_chat_id = env::var("TELEGRAM_INFO_CHAT_ID")
            .map(|v| v.parse().unwrap_or(0))
            .unwrap_or(0);
        let telegram_notification_chat_id = env::var("TELEGRAM_NOTIFICATION_CHAT_ID")
            .map(|v| v.parse().unwrap_or(0))
            .unwrap_or(0);
        let mail_retention_days = env::var("MAIL_RETENTION_DAYS")
            .map(|v| v.parse().unwrap_or(30))
            .unwrap_or(30);
        let address_limit = env::var("ADDRESS_LIMIT")
            .map(|v| v.parse().unwrap_or(600))
            .unwrap_or(600);
        let explorer_url =
            env::var("EXPLORER_URL").unwrap_or_else(|_| "https://api.blockchair.com".to_string());
        let explorer_timeout = env::var("EXPLORER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));
        let explorer_throttle = env::var("EXPLORER_THROTTLE_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(2));
        // Hours outside 0-23 would make the daily schedule unrepresentable.
        let daily_run_hour = env::var("DAILY_RUN_HOUR")
            .map(|v| v.parse().unwrap_or(14))
            .unwrap_or(14)
            .min(23);

        Self {
            database_url,
            imap_host,
            imap_port,
            imap_username,
            imap_password,
            imap_mailbox,
            telegram_bot_token,
            telegram_info_chat_id,
            telegram_notification_chat_id,
            mail_retention_days,
            address_limit,
            explorer_url,
            explorer_timeout,
            explorer_throttle,
            daily_run_hour,
        }
    }
}
