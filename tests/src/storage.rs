#![cfg(test)]
use allocmap_common::Address;
use allocmap_common::network::range;
use allocmap_common::sql::{self, SqlPair};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn sql_round_trip_of_parsed_addresses() {
    for text in ["::", "::1", "1.2.3.4", "2001:db8::1", "8000::", "7fff:ffff::"] {
        let addr: Address = text.parse().unwrap();
        let pair = sql::to_sql(&addr);
        assert_eq!(sql::from_sql(pair.first, pair.second), addr);
    }
}

#[test]
fn sql_range_query_matches_containment() {
    let block = range::cidr("193.0.0.0/21").unwrap();
    let (low, high) = block.to_sql();

    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..500 {
        let candidate = Address::from(rng.random::<u32>() as u128 | 0xffff_0000_0000);
        let pair: SqlPair = candidate.to_sql();
        // BETWEEN on the signed columns
        let between = low <= pair && pair <= high;
        assert_eq!(between, block.contains(&candidate), "{candidate}");
    }

    let inside: Address = "193.0.7.255".parse().unwrap();
    let outside: Address = "193.0.8.0".parse().unwrap();
    assert!(low <= inside.to_sql() && inside.to_sql() <= high);
    assert!(outside.to_sql() > high);
}

#[test]
fn sorting_by_sql_pair_sorts_addresses() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut addrs: Vec<Address> = (0..200).map(|_| Address::from(rng.random::<u128>())).collect();
    addrs.push(Address::LOWEST);
    addrs.push(Address::HIGHEST);

    let mut by_pair = addrs.clone();
    by_pair.sort_by_key(|a| a.to_sql());
    addrs.sort();

    assert_eq!(addrs, by_pair);
    assert_eq!(addrs.first(), Some(&Address::LOWEST));
    assert_eq!(addrs.last(), Some(&Address::HIGHEST));
}
