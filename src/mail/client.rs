use crate::config::Config;
use crate::mail::MailError;
use async_imap::Session;
use async_native_tls::TlsStream;
use futures::TryStreamExt;
use tokio::net::TcpStream;
use tracing::debug;

/// A logged-in IMAP session with the configured mailbox selected.
pub struct MailboxClient {
    session: Session<TlsStream<TcpStream>>,
}

impl MailboxClient {
    /// Connect over TLS, authenticate and select the configured mailbox.
    pub async fn connect(config: &Config) -> Result<Self, MailError> {
        let tcp = TcpStream::connect((config.imap_host.as_str(), config.imap_port)).await?;
        let tls = async_native_tls::TlsConnector::new();
        let tls_stream = tls.connect(config.imap_host.as_str(), tcp).await?;

        let client = async_imap::Client::new(tls_stream);
        let mut session = client
            .login(&config.imap_username, &config.imap_password)
            .await
            .map_err(|(err, _client)| err)?;

        session.select(&config.imap_mailbox).await?;
        debug!("selected mailbox {}", config.imap_mailbox);

        Ok(Self { session })
    }

    /// Sequence numbers of every message currently in the mailbox.
    pub async fn list_all(&mut self) -> Result<Vec<u32>, MailError> {
        let mut seqs: Vec<u32> = self.session.search("ALL").await?.into_iter().collect();
        seqs.sort_unstable();
        Ok(seqs)
    }

    /// Resolve the durable UID of a message. Sequence numbers are transient
    /// and shift between sessions; the UID is what the store keys on.
    pub async fn resolve_uid(&mut self, seq: u32) -> Result<u32, MailError> {
        let fetches: Vec<_> = self
            .session
            .fetch(seq.to_string(), "(UID)")
            .await?
            .try_collect()
            .await?;

        fetches
            .last()
            .and_then(|fetch| fetch.uid)
            .ok_or(MailError::MissingUid(seq))
    }

    /// Download the full RFC 822 message.
    pub async fn fetch_message(&mut self, seq: u32) -> Result<Vec<u8>, MailError> {
        let fetches: Vec<_> = self
            .session
            .fetch(seq.to_string(), "(RFC822)")
            .await?
            .try_collect()
            .await?;

        fetches
            .last()
            .and_then(|fetch| fetch.body().map(|bytes| bytes.to_vec()))
            .ok_or(MailError::MissingBody(seq))
    }

    /// Close the mailbox and log out. A failure here is still surfaced to
    /// the caller, matching the rest of the protocol steps.
    pub async fn disconnect(mut self) -> Result<(), MailError> {
        self.session.close().await?;
        self.session.logout().await?;
        Ok(())
    }
}
