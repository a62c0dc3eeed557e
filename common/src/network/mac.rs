use std::fmt;
use std::sync::OnceLock;

use pnet::util::MacAddr;
use rand::Rng;
use regex::Regex;

/// Word characters rather than hex digits: tool output is matched loosely and
/// whatever looks like a MAC is taken as-is.
const MAC_PATTERN: &str = r"[0-9A-Za-z_]{2}(?::[0-9A-Za-z_]{2}){5}";

/// Candidates for the second hex digit of the first octet. All of them have
/// the locally administered bit set and the multicast bit clear.
const FIRST_OCTET_LOW_NIBBLES: [u8; 4] = [0x2, 0x6, 0xa, 0xe];

static MAC_REGEX: OnceLock<Regex> = OnceLock::new();

fn mac_regex() -> &'static Regex {
    MAC_REGEX.get_or_init(|| Regex::new(MAC_PATTERN).expect("MAC pattern must compile"))
}

/// A hardware address as text.
///
/// Addresses read from tool output keep their exact spelling so that they can
/// be compared literally with the address that was requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

impl MacAddress {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Finds the first MAC-looking substring in `text`.
    pub fn extract(text: &str) -> Option<Self> {
        mac_regex().find(text).map(|m| Self(m.as_str().to_owned()))
    }

    /// Whether `text` consists of exactly one MAC-looking token.
    pub fn looks_valid(text: &str) -> bool {
        mac_regex()
            .find(text)
            .is_some_and(|m| m.start() == 0 && m.end() == text.len())
    }

    /// The first octet takes a uniform high nibble and a low nibble drawn
    /// from `{2, 6, a, e}`; the other five octets are uniform bytes.
    pub fn generate_random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let high: u8 = rng.random_range(0..0x10);
        let low: u8 = FIRST_OCTET_LOW_NIBBLES[rng.random_range(0..FIRST_OCTET_LOW_NIBBLES.len())];
        let tail: [u8; 5] = rng.random();

        MacAddr::new((high << 4) | low, tail[0], tail[1], tail[2], tail[3], tail[4]).into()
    }
}

impl From<MacAddr> for MacAddress {
    fn from(mac: MacAddr) -> Self {
        Self(format!(
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            mac.0, mac.1, mac.2, mac.3, mac.4, mac.5
        ))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
