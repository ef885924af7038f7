//! Voter address type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// An opaque, comparable voter identity.
///
/// The ledger never authenticates an address, it only compares them. Addresses
/// are stored lower-cased so an EIP-55 checksummed spelling and its lower-case
/// form name the same voter.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct VoterAddress(String);

impl VoterAddress {
    /// The prefix of a hex-encoded account address.
    pub const PREFIX: &'static str = "0x";

    /// Number of hex digits after the prefix.
    pub const HEX_LEN: usize = 40;

    /// Create an address from any identifier, without validating its shape.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().to_ascii_lowercase())
    }

    /// Build the canonical hex address for a 20-byte account id.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Self(format!("{}{}", Self::PREFIX, hex))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this address has the `0x` + 40 hex digit account form.
    pub fn is_valid(&self) -> bool {
        self.0
            .strip_prefix(Self::PREFIX)
            .is_some_and(|hex| {
                hex.len() == Self::HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit())
            })
    }
}

impl fmt::Display for VoterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VoterAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let address = Self::new(s.trim());
        if address.is_valid() {
            Ok(address)
        } else {
            Err(TypesError::InvalidAddress(s.to_string()))
        }
    }
}

impl From<String> for VoterAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for VoterAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksummed_and_lowercase_forms_are_equal() {
        let checksummed: VoterAddress = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap();
        let lower: VoterAddress = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap();
        assert_eq!(checksummed, lower);
    }

    #[test]
    fn parse_rejects_malformed_addresses() {
        assert!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse::<VoterAddress>().is_err());
        assert!("0x1234".parse::<VoterAddress>().is_err());
        assert!("0xzz9fd6e51aad88f6f4ce6ab8827279cfffb92266".parse::<VoterAddress>().is_err());
    }

    #[test]
    fn opaque_identifiers_are_allowed_through_new() {
        let alice = VoterAddress::new("alice");
        assert!(!alice.is_valid());
        assert_eq!(alice.as_str(), "alice");
    }

    #[test]
    fn from_bytes_produces_valid_address() {
        let address = VoterAddress::from_bytes([0xab; 20]);
        assert!(address.is_valid());
        assert_eq!(address.as_str(), format!("0x{}", "ab".repeat(20)));
    }

    #[test]
    fn deserializing_normalizes_case() {
        let address: VoterAddress =
            serde_json::from_str("\"0x70997970C51812dc3A010C7d01b50e0d17dc79C8\"").unwrap();
        assert_eq!(address.as_str(), "0x70997970c51812dc3a010c7d01b50e0d17dc79c8");
    }
}
