//! # Allocmap Common
//!
//! The address core shared by the `allocmap` tool and its tests.
//!
//! * **[`address`]**: the 128-bit [`Address`] value, its text codec and wire layout.
//! * **[`network`]**: inclusive address ranges and CIDR resolution.
//! * **[`sql`]**: the order-preserving signed pair used for range queries.
//!
//! IPv4 addresses always live in IPv4-mapped form (`::ffff:0:0/96`), so every
//! operation works on one representation.

pub mod address;
pub mod config;
pub mod error;
pub mod network;
pub mod sql;

pub use address::Address;
pub use error::{AddressError, Result};
pub use network::range::Range;
pub use sql::SqlPair;
