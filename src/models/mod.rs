/// An address row as stored: the base-58 value plus the UID of the mail it
/// was found in. The same value may appear under several mails.
#[derive(Debug, Clone)]
pub struct TrackedAddress {
    pub id: i64,
    pub address: String,
    pub mail_uid: u32,
}
