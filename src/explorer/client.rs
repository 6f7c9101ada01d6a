use crate::config::Config;
use crate::explorer::models::AddressDashboard;
use crate::explorer::ExplorerError;
use reqwest::Client;

/// Transactions requested per address. The explorer caps pages at this
/// size; one page is all the service ever looks at.
const TRANSACTION_PAGE_LIMIT: u32 = 10_000;

pub struct ExplorerClient {
    http: Client,
    base_url: String,
}

impl ExplorerClient {
    pub fn new(config: &Config) -> Result<Self, ExplorerError> {
        let http = Client::builder().timeout(config.explorer_timeout).build()?;

        Ok(Self {
            http,
            base_url: config.explorer_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the dashboard for one address: its transaction history plus
    /// the current market price. Non-2xx statuses and malformed JSON both
    /// surface as errors.
    pub async fn address_dashboard(&self, address: &str) -> Result<AddressDashboard, ExplorerError> {
        let url = format!(
            "{}/bitcoin/dashboards/address/{}?limit={}&transaction_details=true&state=latest",
            self.base_url, address, TRANSACTION_PAGE_LIMIT
        );

        let dashboard = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(dashboard)
    }
}
