#![cfg(test)]
use allocmap_common::address::{self, Address};
use allocmap_common::error::AddressError;

/// Inputs that must come back unchanged from parse -> format.
const CANONICAL: &[&str] = &[
    "1.2.3.4",
    "0.0.0.0",
    "255.255.255.255",
    "192.168.0.255",
    "::",
    "::1",
    "2001:db8::1",
    "2001:db8::",
    "fe80::1:2",
    "1:0:0:2::3:4",
    "2001:db8:85a3:8d3:1319:8a2e:370:7344",
    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
];

#[test]
fn canonical_text_round_trips() {
    for text in CANONICAL {
        let addr = address::parse(text).unwrap();
        assert_eq!(address::format(&addr), *text, "round trip of {text}");
        assert_eq!(addr.to_string().parse::<Address>(), Ok(addr));
    }
}

#[test]
fn variants_normalize_to_canonical_text() {
    let cases = [
        ("::ffff:1.2.3.4", "1.2.3.4"),
        ("::ffff:0102:0304", "1.2.3.4"),
        ("10", "10.0.0.0"),
        ("3.14", "3.14.0.0"),
        ("2001:0DB8:0000:0000:0000:0000:0000:0001", "2001:db8::1"),
        ("1:0:0:0:0:0:0:0", "1::"),
        ("::127.0.0.1", "::7f00:1"),
    ];
    for (input, expected) in cases {
        let addr: Address = input.parse().unwrap();
        assert_eq!(addr.to_string(), expected, "normalizing {input}");
    }
}

#[test]
fn rejected_inputs_do_not_touch_destination() {
    let original: Address = "2001:db8::1".parse().unwrap();
    for bad in ["999.1.1.1", ":::1", "1:2:3:::7:8", " ::1", "hoho", "1:2", "1.2.3.4.5"] {
        let mut dest = original;
        let err = dest.set_from_str(bad).unwrap_err();
        assert!(matches!(err, AddressError::MalformedInput { .. }), "{bad}: {err}");
        assert_eq!(dest, original);
    }
}

#[test]
fn wire_bytes_and_std_conversions_round_trip() {
    for text in CANONICAL {
        let addr: Address = text.parse().unwrap();
        let bytes = addr.to_bytes();
        for (i, byte) in bytes.iter().enumerate() {
            assert_eq!(*byte, addr.get_byte(i));
        }
        assert_eq!(Address::try_from(&bytes[..]), Ok(addr));

        let std_ip = addr.to_ip_addr();
        assert_eq!(Address::from(std_ip), addr);
        assert_eq!(std_ip.is_ipv4(), addr.is_ipv4());
    }
}
