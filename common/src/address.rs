//! # Address Value
//!
//! A single 128-bit type for both address families.
//!
//! The value is kept as eight 16-bit groups, most significant first. IPv4
//! addresses are stored IPv4-mapped: groups 0-4 are zero, group 5 is `0xffff`
//! and groups 6-7 carry the 32-bit payload. Every value handed out by the
//! text codec satisfies this, so ordering and range arithmetic never need to
//! branch on the family.
//!
//! The wire layout used for raw records is the groups in order, big-endian,
//! 16 bytes with no padding.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ops::BitOr;

use crate::error::AddressError;

mod format;
mod parse;

pub use format::format;
pub use parse::parse;

/// Group 5 of every IPv4-mapped address.
pub const IPV4_MAPPED_MARKER: u16 = 0xffff;

/// Size of one raw address record.
pub const WIRE_LEN: usize = 16;

/// An immutable IPv6 (or IPv4-mapped) address.
///
/// Ordering is lexicographic over the groups, which is the same as comparing
/// the addresses as unsigned 128-bit integers.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    groups: [u16; 8],
}

impl Address {
    /// `::`, the smallest address.
    pub const LOWEST: Address = Address::from_groups([0; 8]);
    /// `ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff`, the largest address.
    pub const HIGHEST: Address = Address::from_groups([0xffff; 8]);

    pub const fn from_groups(groups: [u16; 8]) -> Self {
        Self { groups }
    }

    pub const fn groups(&self) -> [u16; 8] {
        self.groups
    }

    /// Builds an IPv4-mapped address from the two payload groups.
    pub const fn ipv4_mapped(high: u16, low: u16) -> Self {
        Self::from_groups([0, 0, 0, 0, 0, IPV4_MAPPED_MARKER, high, low])
    }

    /// Builds an address from two 64-bit halves: `high` fills groups 0-3,
    /// `low` fills groups 4-7.
    pub const fn from_u64_pair(high: u64, low: u64) -> Self {
        Self::from_groups([
            (high >> 48) as u16,
            (high >> 32) as u16,
            (high >> 16) as u16,
            high as u16,
            (low >> 48) as u16,
            (low >> 32) as u16,
            (low >> 16) as u16,
            low as u16,
        ])
    }

    /// Splits the address into groups 0-3 and groups 4-7.
    pub const fn to_u64_pair(&self) -> (u64, u64) {
        let g = &self.groups;
        let high = (g[0] as u64) << 48 | (g[1] as u64) << 32 | (g[2] as u64) << 16 | g[3] as u64;
        let low = (g[4] as u64) << 48 | (g[5] as u64) << 32 | (g[6] as u64) << 16 | g[7] as u64;
        (high, low)
    }

    /// Returns byte `index`, 0 being the most significant.
    ///
    /// The index wraps into `0..16` instead of being rejected.
    pub fn get_byte(&self, index: usize) -> u8 {
        let index = index & 0x0f;
        let group = self.groups[index >> 1];
        if index & 1 == 1 {
            (group & 0xff) as u8
        } else {
            (group >> 8) as u8
        }
    }

    /// True for addresses inside `::ffff:0:0/96`.
    pub fn is_ipv4(&self) -> bool {
        self.groups[..5].iter().all(|g| *g == 0) && self.groups[5] == IPV4_MAPPED_MARKER
    }

    pub fn from_bytes(bytes: [u8; WIRE_LEN]) -> Self {
        let mut groups = [0u16; 8];
        for (group, pair) in groups.iter_mut().zip(bytes.chunks_exact(2)) {
            *group = u16::from_be_bytes([pair[0], pair[1]]);
        }
        Self::from_groups(groups)
    }

    pub fn to_bytes(&self) -> [u8; WIRE_LEN] {
        let mut bytes = [0u8; WIRE_LEN];
        for (pair, group) in bytes.chunks_exact_mut(2).zip(self.groups.iter()) {
            pair.copy_from_slice(&group.to_be_bytes());
        }
        bytes
    }

    /// Converts to the matching `std::net` address, IPv4 for mapped values.
    pub fn to_ip_addr(&self) -> IpAddr {
        let ipv6 = Ipv6Addr::from(self.groups);
        if self.is_ipv4() {
            let [.., a, b, c, d] = ipv6.octets();
            IpAddr::V4(Ipv4Addr::new(a, b, c, d))
        } else {
            IpAddr::V6(ipv6)
        }
    }
}

/// The process-wide lower bound of the address space.
pub fn lowest() -> &'static Address {
    &Address::LOWEST
}

/// The process-wide upper bound of the address space.
pub fn highest() -> &'static Address {
    &Address::HIGHEST
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl BitOr for Address {
    type Output = Address;

    fn bitor(self, rhs: Address) -> Address {
        let mut groups = self.groups;
        for (group, other) in groups.iter_mut().zip(rhs.groups) {
            *group |= other;
        }
        Address::from_groups(groups)
    }
}

impl BitOr<&Address> for &Address {
    type Output = Address;

    fn bitor(self, rhs: &Address) -> Address {
        *self | *rhs
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(record: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; WIRE_LEN] = record
            .try_into()
            .map_err(|_| AddressError::WireLength { len: record.len() })?;
        Ok(Address::from_bytes(bytes))
    }
}

impl From<u128> for Address {
    fn from(value: u128) -> Self {
        Address::from_u64_pair((value >> 64) as u64, value as u64)
    }
}

impl From<Address> for u128 {
    fn from(addr: Address) -> Self {
        let (high, low) = addr.to_u64_pair();
        (high as u128) << 64 | low as u128
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ipv4: Ipv4Addr) -> Self {
        let [a, b, c, d] = ipv4.octets();
        Address::ipv4_mapped(u16::from_be_bytes([a, b]), u16::from_be_bytes([c, d]))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ipv6: Ipv6Addr) -> Self {
        Address::from_groups(ipv6.segments())
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ipv4) => ipv4.into(),
            IpAddr::V6(ipv6) => ipv6.into(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
