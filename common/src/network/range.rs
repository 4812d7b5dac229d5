//! # Address Range Model
//!
//! Inclusive `[low, high]` address ranges and their derivation from CIDR
//! notation.
//!
//! IPv4 blocks are resolved in the mapped space: a `/24` on an IPv4 address
//! fixes 96 + 24 bits of the 128-bit value.

use std::fmt;

use tracing::debug;

use crate::address::{self, Address};
use crate::error::{AddressError, Result};
use crate::sql::SqlPair;

/// Bits in front of the IPv4 payload of a mapped address.
const IPV4_MAPPED_PREFIX: i64 = 96;

/// An inclusive range of addresses.
///
/// `low <= high` is not enforced; [`cidr`] always yields ordered bounds
/// because it only ever sets bits on top of `low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    pub low: Address,
    pub high: Address,
}

impl Range {
    pub fn new(low: Address, high: Address) -> Self {
        Self { low, high }
    }

    /// A range holding exactly one address.
    pub fn single(addr: Address) -> Self {
        Self::new(addr, addr)
    }

    pub fn contains(&self, addr: &Address) -> bool {
        self.low <= *addr && *addr <= self.high
    }

    /// Both bounds in their SQL form, `(low, high)`.
    pub fn to_sql(&self) -> (SqlPair, SqlPair) {
        (self.low.to_sql(), self.high.to_sql())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Sets the lowest `n` bits of a 64-bit half.
fn low_ones(n: i32) -> u64 {
    match n {
        n if n <= 0 => 0,
        n if n >= 64 => u64::MAX,
        n => (1u64 << n) - 1,
    }
}

/// Creates the host mask for a prefix fixing `fixed_bits` bits: every bit not
/// fixed by the prefix is set.
///
/// `fixed_bits` is clamped into `1..=128` instead of being rejected.
pub fn add_mask(fixed_bits: i32) -> Address {
    let fixed_bits = fixed_bits.clamp(1, 128);
    if fixed_bits <= 64 {
        Address::from_u64_pair(low_ones(64 - fixed_bits), u64::MAX)
    } else {
        Address::from_u64_pair(0, low_ones(128 - fixed_bits))
    }
}

/// Resolves CIDR notation (e.g. `192.168.0.0/24`) to its lowest and highest
/// address. Text without a `/` is a single host.
///
/// Only the first two `/`-separated parts are read; anything after a second
/// `/` is ignored. The low bound is the address as written; host bits are not
/// cleared.
pub fn cidr(input: &str) -> Result<Range> {
    let mut parts = input.split('/');
    let addr_str = parts.next().unwrap_or_default();
    let Some(prefix_str) = parts.next() else {
        return address::parse(input).map(Range::single);
    };

    let addr = address::parse(addr_str)?;
    let prefix: i64 = prefix_str
        .parse::<i32>()
        .map_err(|_| AddressError::malformed(input, "prefix length is not an integer"))?
        .into();

    let fixed_bits = if addr.is_ipv4() {
        prefix + IPV4_MAPPED_PREFIX
    } else {
        prefix
    };
    if !(1..=128).contains(&fixed_bits) {
        debug!(input, fixed_bits, "rejecting prefix length");
        return Err(AddressError::InvalidPrefixLength { prefix });
    }

    // In range, so the cast is lossless
    let mask = add_mask(fixed_bits as i32);
    Ok(Range::new(addr, addr | mask))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
