//! Text decoding for [`Address`].
//!
//! Accepts dotted-decimal IPv4, colon-hex IPv6 (with one `::` elision and an
//! optional dotted-decimal tail) and the bare-number class A shorthand found
//! in old registry allocation lists.

use std::str::FromStr;

use tracing::trace;

use crate::address::{Address, IPV4_MAPPED_MARKER};
use crate::error::{AddressError, Result};

/// Characters inspected to pick the notation family.
const LOOKAHEAD: usize = 5;

const MAX_HEXTET_DIGITS: usize = 4;

#[derive(Debug, PartialEq, Eq)]
enum Notation {
    Ipv4,
    Ipv6,
    /// Only digits, e.g. `10`, which the allocation lists use for `10.0.0.0`.
    BareNumber,
}

/// Decodes `input` into an address.
///
/// Nothing is produced unless the whole input decodes: there is no partially
/// filled result on failure.
pub fn parse(input: &str) -> Result<Address> {
    match detect(input)? {
        Notation::Ipv4 => Parser::new(input, input).ipv4(),
        Notation::Ipv6 => Parser::new(input, input).ipv6(),
        Notation::BareNumber => {
            trace!(input, "reading bare number as a class A network");
            let expanded = format!("{input}.0.0.0");
            Parser::new(input, &expanded).ipv4()
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl Address {
    /// Replaces `self` with the decoded `input`, leaving it untouched on error.
    pub fn set_from_str(&mut self, input: &str) -> Result<()> {
        *self = parse(input)?;
        Ok(())
    }
}

fn detect(input: &str) -> Result<Notation> {
    let window = &input.as_bytes()[..input.len().min(LOOKAHEAD)];
    for c in window {
        match c {
            b'0'..=b'9' => continue,
            b'a'..=b'f' | b':' => return Ok(Notation::Ipv6),
            b'.' => return Ok(Notation::Ipv4),
            _ => return Err(AddressError::malformed(input, "unrecognized notation")),
        }
    }
    match input.len() {
        0 => Err(AddressError::malformed(input, "empty input")),
        1..=LOOKAHEAD => Ok(Notation::BareNumber),
        _ => Err(AddressError::malformed(
            input,
            "no separator within the first five characters",
        )),
    }
}

/// Reads a hextet's hex digits back as decimal digits, e.g. `0x192` -> 192.
///
/// Used when a hextet turns out to be the first octet of an IPv4 tail.
fn decimal_from_hextet(hextet: u16) -> Option<u16> {
    if hextet & 0xf000 != 0 {
        return None;
    }
    let digits = [(hextet >> 8) & 0xf, (hextet >> 4) & 0xf, hextet & 0xf];
    if digits.iter().any(|d| *d > 9) {
        return None;
    }
    let value = digits[0] * 100 + digits[1] * 10 + digits[2];
    (value <= 255).then_some(value)
}

struct Parser<'a> {
    /// Reported in errors; differs from `bytes` when the input was expanded.
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, text: &'a str) -> Self {
        Self {
            input,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<u8> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn error(&self, reason: &'static str) -> AddressError {
        AddressError::malformed(self.input, reason)
    }

    fn finish(&self, groups: [u16; 8]) -> Result<Address> {
        if !self.at_end() {
            return Err(self.error("unexpected trailing characters"));
        }
        Ok(Address::from_groups(groups))
    }

    fn ipv4(mut self) -> Result<Address> {
        let mut groups = [0, 0, 0, 0, 0, IPV4_MAPPED_MARKER, 0, 0];
        self.read_ipv4_octets(&mut groups, 6, 0)?;
        self.finish(groups)
    }

    fn ipv6(mut self) -> Result<Address> {
        let mut groups = [0u16; 8];
        let mut elision: Option<usize> = None;
        let mut count: usize = 0;

        while count < 8 {
            if count > 0 {
                match self.peek() {
                    Some(b':') => self.pos += 1,
                    Some(b'.') => {
                        self.pos += 1;
                        self.read_ipv4_tail(&mut groups, count - 1)?;
                        count += 1;
                        break;
                    }
                    _ => break,
                }
            }

            match self.peek() {
                Some(b':') => {
                    self.pos += 1;
                    if elision.is_some() {
                        return Err(self.error("more than one '::'"));
                    }
                    elision = Some(count);
                    if count == 0 && self.next() != Some(b':') {
                        return Err(self.error("leading ':' must be part of '::'"));
                    }
                }
                Some(c) if c.is_ascii_hexdigit() => {}
                _ => break,
            }

            // No digits after a separator means the address ended
            match self.read_hextet()? {
                Some(hextet) => groups[count] = hextet,
                None => break,
            }
            count += 1;
        }

        match elision {
            Some(start) => {
                let shift = 8 - count;
                for i in (start..8).rev() {
                    groups[i] = if i >= start + shift { groups[i - shift] } else { 0 };
                }
            }
            None if count != 8 => return Err(self.error("expected eight groups or '::'")),
            None => {}
        }

        self.finish(groups)
    }

    /// Handles `a:b:...:w.x.y.z`: the hextet at `index` was really the first
    /// octet, the remaining three follow the dot.
    fn read_ipv4_tail(&mut self, groups: &mut [u16; 8], index: usize) -> Result<()> {
        let first = decimal_from_hextet(groups[index])
            .ok_or_else(|| self.error("invalid first octet in IPv4 tail"))?;
        groups[index] = first << 8;
        self.read_ipv4_octets(groups, index, 1)
    }

    /// Reads dotted-decimal octets `first..4` into groups `offset` and
    /// `offset + 1`. Octets missing at the end of input count as 0.
    fn read_ipv4_octets(&mut self, groups: &mut [u16; 8], offset: usize, first: usize) -> Result<()> {
        for octet_pos in first..4 {
            let octet = match self.read_decimal() {
                Some(octet) => octet,
                None if self.at_end() => 0,
                None => return Err(self.error("expected a decimal octet")),
            };
            if octet > 255 {
                return Err(self.error("octet out of range"));
            }
            let octet = octet as u16;

            if octet_pos < 3 && !self.at_end() && self.next() != Some(b'.') {
                return Err(self.error("expected '.' between octets"));
            }

            let group = &mut groups[offset + octet_pos / 2];
            if octet_pos % 2 == 0 {
                *group = octet << 8;
            } else {
                *group |= octet;
            }
        }
        Ok(())
    }

    fn read_decimal(&mut self) -> Option<u32> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(c @ b'0'..=b'9') = self.peek() {
            value = value.saturating_mul(10).saturating_add(u32::from(c - b'0'));
            self.pos += 1;
        }
        (self.pos > start).then_some(value)
    }

    fn read_hextet(&mut self) -> Result<Option<u16>> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.pos += 1;
        }
        let digits = &self.bytes[start..self.pos];
        if digits.is_empty() {
            return Ok(None);
        }
        if digits.len() > MAX_HEXTET_DIGITS {
            return Err(self.error("hextet longer than four digits"));
        }
        let value = digits.iter().fold(0u16, |acc, c| {
            // Only ASCII hex digits reach here
            let nibble = (*c as char).to_digit(16).unwrap_or(0) as u16;
            acc << 4 | nibble
        });
        Ok(Some(value))
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
