#![cfg(test)]
use allocmap_common::address::{self, Address};
use allocmap_common::error::AddressError;
use allocmap_common::network::range::{self, Range};

fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

#[test]
fn ipv4_block_bounds() {
    let range = range::cidr("192.168.0.0/24").unwrap();
    assert_eq!(range.low.to_string(), "192.168.0.0");
    assert_eq!(range.high.to_string(), "192.168.0.255");
    assert!(range.low.is_ipv4() && range.high.is_ipv4());
}

#[test]
fn ipv6_block_bounds() {
    let range = range::cidr("2001:db8::/32").unwrap();
    assert_eq!(range.low.to_string(), "2001:db8::");
    assert_eq!(
        range.high.to_string(),
        "2001:db8:ffff:ffff:ffff:ffff:ffff:ffff"
    );
}

#[test]
fn mapped_ipv6_text_counts_as_ipv4_prefix() {
    let range = range::cidr("::ffff:10.0.0.0/8").unwrap();
    assert_eq!(range.high.to_string(), "10.255.255.255");
}

#[test]
fn host_mask_matches_block_size() {
    for prefix in 1..=32 {
        let range = range::cidr(&format!("0.0.0.0/{prefix}")).unwrap();
        let size = u128::from(range.high) - u128::from(range.low) + 1;
        assert_eq!(size, 1u128 << (32 - prefix), "/{prefix}");
    }
    for prefix in 1..=128 {
        let range = range::cidr(&format!("::/{prefix}")).unwrap();
        let host_bits = u128::from(range.high);
        assert_eq!(host_bits.count_ones(), 128 - prefix, "/{prefix}");
        assert_eq!(range.high, range::add_mask(prefix as i32));
    }
}

#[test]
fn prefix_validation_differs_from_mask_clamping() {
    assert_eq!(
        range::cidr("::/0"),
        Err(AddressError::InvalidPrefixLength { prefix: 0 })
    );
    assert_eq!(range::add_mask(0), range::add_mask(1));
    assert_eq!(range::add_mask(500), range::add_mask(128));
}

#[test]
fn nested_blocks_contain_each_other() {
    let outer = range::cidr("10.0.0.0/8").unwrap();
    let inner = range::cidr("10.20.0.0/16").unwrap();
    assert!(outer.contains(&inner.low) && outer.contains(&inner.high));
    assert!(!inner.contains(&outer.low));
    assert!(Range::single(addr("10.20.0.1")).contains(&addr("10.20.0.1")));
}

#[test]
fn bounds_stay_within_address_space() {
    for block in ["0.0.0.0/0", "::/1", "8000::/1", "ffff::/16", "1.2.3.4"] {
        let range = range::cidr(block).unwrap();
        assert!(*address::lowest() <= range.low);
        assert!(range.low <= range.high);
        assert!(range.high <= *address::highest());
    }
}
