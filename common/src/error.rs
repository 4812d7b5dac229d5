//! Error types for address decoding and range resolution.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AddressError>;

/// Every failure the address core can report.
///
/// All of them are local and recoverable: a failed parse never hands back a
/// partially decoded address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Text that does not decode to an address (or a CIDR block).
    #[error("malformed address '{input}': {reason}")]
    MalformedInput { input: String, reason: &'static str },

    /// CIDR prefix outside `[1, 128]` once IPv4 prefixes are shifted by 96.
    #[error("invalid prefix length {prefix}: must resolve to 1..=128 fixed bits")]
    InvalidPrefixLength { prefix: i64 },

    /// Raw record with the wrong size for the 16 byte wire layout.
    #[error("address record must be 16 bytes, got {len}")]
    WireLength { len: usize },
}

impl AddressError {
    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        AddressError::MalformedInput {
            input: input.to_string(),
            reason,
        }
    }
}
