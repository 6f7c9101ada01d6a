use crate::db;
use crate::notify::{Notifier, NotifyError};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Mutex;

/// A legacy address with a correct checksum, used across the suite.
pub const KNOWN_ADDRESS: &str = "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2";

/// Collects notifications instead of talking to Telegram.
#[derive(Default)]
pub struct RecordingNotifier {
    pub info: Mutex<Vec<String>>,
    pub payments: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_info(&self, text: &str) -> Result<(), NotifyError> {
        self.info.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_payment(&self, text: &str) -> Result<(), NotifyError> {
        self.payments.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Fresh in-memory store with the schema applied. A single connection keeps
/// every query on the same in-memory database.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("open in-memory database");

    sqlx::query(db::INIT_SCHEMA)
        .execute(&pool)
        .await
        .expect("apply schema");

    pool
}

pub async fn seed_mail(pool: &SqlitePool, uid: u32, subject: Option<&str>, observed_at: i64) {
    let mut conn = pool.acquire().await.unwrap();
    db::mail::record_mail(&mut conn, uid, subject, observed_at)
        .await
        .unwrap();
}

pub async fn seed_address(pool: &SqlitePool, address: &str, mail_uid: u32) -> i64 {
    let mut conn = pool.acquire().await.unwrap();
    db::address::record_address(&mut conn, address, mail_uid)
        .await
        .unwrap()
}
