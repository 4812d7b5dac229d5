//! Canonical text for [`Address`].

use std::fmt;

use crate::address::Address;

/// Renders `addr` as dotted-decimal (IPv4-mapped) or compressed IPv6.
pub fn format(addr: &Address) -> String {
    addr.to_string()
}

/// Start index of the longest run of zero groups.
///
/// The scan runs from group 7 down and only a strictly longer run replaces
/// the current one, so equal runs resolve to the one nearest group 7.
fn omission_start(groups: &[u16; 8]) -> Option<usize> {
    let mut start = None;
    let mut longest = 0;
    let mut current = 0;
    for i in (0..8).rev() {
        if groups[i] == 0 {
            current += 1;
            if current > longest {
                start = Some(i);
                longest = current;
            }
        } else {
            current = 0;
        }
    }
    start
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.groups();

        if self.is_ipv4() {
            let [a, b] = groups[6].to_be_bytes();
            let [c, d] = groups[7].to_be_bytes();
            return write!(f, "{a}.{b}.{c}.{d}");
        }

        let omission = omission_start(&groups);
        let mut i = 0;
        while i < 8 {
            if omission == Some(i) {
                f.write_str(if i == 0 { "::" } else { ":" })?;
                while i < 7 && groups[i + 1] == 0 {
                    i += 1;
                }
            } else {
                write!(f, "{:x}", groups[i])?;
                if i != 7 {
                    f.write_str(":")?;
                }
            }
            i += 1;
        }
        Ok(())
    }
}
