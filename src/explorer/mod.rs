pub mod client;
pub mod fetcher;
pub mod models;

use crate::notify::NotifyError;
use thiserror::Error;

pub use client::ExplorerClient;
pub use fetcher::{fetch, FetchSummary};

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("explorer API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("explorer response is missing data for address {0}")]
    MissingAddress(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}
