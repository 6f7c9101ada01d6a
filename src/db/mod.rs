pub mod address;
pub mod connection;
pub mod mail;
pub mod transaction;

pub const INIT_SCHEMA: &str = r#"
-- Mails already ingested, keyed by their durable IMAP UID
CREATE TABLE IF NOT EXISTS mails (
    uid INTEGER NOT NULL PRIMARY KEY,
    subject TEXT,
    observed_at INTEGER NOT NULL
);

-- Addresses found in mail bodies; no uniqueness on the value itself
CREATE TABLE IF NOT EXISTS addresses (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    address TEXT NOT NULL,
    mail_id INTEGER NOT NULL,
    FOREIGN KEY (mail_id) REFERENCES mails(uid) ON DELETE CASCADE
);

-- Transactions already seen for an address row
CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    hash TEXT NOT NULL,
    address_id INTEGER NOT NULL,
    FOREIGN KEY (address_id) REFERENCES addresses(id) ON DELETE CASCADE
);

-- Create indexes for efficient querying
CREATE INDEX IF NOT EXISTS idx_addresses_mail ON addresses(mail_id);
CREATE INDEX IF NOT EXISTS idx_transactions_address ON transactions(address_id, hash);
"#;
