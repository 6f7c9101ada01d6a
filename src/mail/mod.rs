pub mod client;
pub mod parser;
pub mod scanner;

use crate::notify::NotifyError;
use thiserror::Error;

pub use client::MailboxClient;
pub use scanner::{scan, ScanSummary};

#[derive(Error, Debug)]
pub enum MailError {
    #[error("IMAP protocol error: {0}")]
    Imap(#[from] async_imap::error::Error),

    #[error("TLS negotiation failed: {0}")]
    Tls(#[from] async_native_tls::Error),

    #[error("connection failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("message {0} came back without a UID")]
    MissingUid(u32),

    #[error("message {0} came back without a body")]
    MissingBody(u32),

    #[error("malformed message: {0}")]
    Parse(#[from] mailparse::MailParseError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}
