use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// Digits of the base-58 alphabet used by legacy Bitcoin addresses. The
/// visually ambiguous characters 0, O, I and l are excluded.
pub const BASE58_DIGITS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Version byte + RIPEMD-160 payload.
const PAYLOAD_LEN: usize = 21;
const CHECKSUM_LEN: usize = 4;
/// Payload plus the checksum.
const DECODED_LEN: usize = PAYLOAD_LEN + CHECKSUM_LEN;

static ADDRESS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b[{BASE58_DIGITS}]{{25,34}}\b")).expect("address pattern compiles")
});

/// Pull every checksum-valid address out of a chunk of text. Candidates are
/// runs of 25-34 alphabet characters delimited by word boundaries; anything
/// that fails the checksum is silently dropped. Order of appearance is kept
/// and duplicates are not collapsed.
pub fn extract_addresses(text: &str) -> Vec<String> {
    ADDRESS_TOKEN
        .find_iter(text)
        .filter(|m| is_valid_address(m.as_str()))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether `token` is a well-formed legacy Bitcoin address.
pub fn is_valid_address(token: &str) -> bool {
    decode_base58check(token).is_some()
}

/// Decode a token as a base-58 big-endian number occupying exactly 25 bytes
/// (left-padded with zeros when shorter) and verify that the trailing 4
/// bytes equal the first 4 bytes of the double-SHA-256 digest of the
/// leading 21. `None` means "not an address", never an error.
fn decode_base58check(token: &str) -> Option<[u8; DECODED_LEN]> {
    let digits = bs58::decode(token).into_vec().ok()?;
    if digits.len() > DECODED_LEN {
        return None;
    }

    let mut raw = [0u8; DECODED_LEN];
    raw[DECODED_LEN - digits.len()..].copy_from_slice(&digits);

    let digest = Sha256::digest(Sha256::digest(&raw[..PAYLOAD_LEN]));
    if raw[PAYLOAD_LEN..] == digest[..CHECKSUM_LEN] {
        Some(raw)
    } else {
        None
    }
}
