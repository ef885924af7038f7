//! Fixed-length proposal names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// A proposal name packed into a 32-byte slot.
///
/// UTF-8 bytes are left-aligned and zero padded. At most [`ProposalName::MAX_LEN`]
/// bytes are accepted so the slot always keeps a terminating zero byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProposalName([u8; 32]);

impl ProposalName {
    pub const MAX_LEN: usize = 31;

    /// Encode a string into a name slot.
    pub fn encode(name: &str) -> Result<Self, TypesError> {
        let bytes = name.as_bytes();
        if bytes.len() > Self::MAX_LEN {
            return Err(TypesError::NameTooLong {
                len: bytes.len(),
                max: Self::MAX_LEN,
            });
        }
        let mut slot = [0u8; 32];
        slot[..bytes.len()].copy_from_slice(bytes);
        Ok(Self(slot))
    }

    /// Wrap a raw slot as-is.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The encoded bytes with trailing zero padding removed.
    pub fn trimmed(&self) -> &[u8] {
        let end = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        &self.0[..end]
    }

    /// Decode the name back into a string.
    pub fn decode(&self) -> String {
        String::from_utf8_lossy(self.trimmed()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.trimmed().is_empty()
    }
}

impl fmt::Debug for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProposalName({:?})", self.decode())
    }
}

impl fmt::Display for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decode())
    }
}

impl FromStr for ProposalName {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::encode(s)
    }
}

impl TryFrom<String> for ProposalName {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::encode(&s)
    }
}

impl From<ProposalName> for String {
    fn from(name: ProposalName) -> Self {
        name.decode()
    }
}

impl PartialEq<str> for ProposalName {
    fn eq(&self, other: &str) -> bool {
        self.trimmed() == other.as_bytes()
    }
}

impl PartialEq<&str> for ProposalName {
    fn eq(&self, other: &&str) -> bool {
        self.trimmed() == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_left_aligned_and_zero_padded() {
        let name = ProposalName::encode("Proposal 1").unwrap();
        assert_eq!(&name.as_bytes()[..10], b"Proposal 1");
        assert!(name.as_bytes()[10..].iter().all(|&b| b == 0));
        assert_eq!(name, "Proposal 1");
    }

    #[test]
    fn rejects_names_without_room_for_terminator() {
        let long = "x".repeat(32);
        assert_eq!(
            ProposalName::encode(&long),
            Err(TypesError::NameTooLong { len: 32, max: 31 })
        );
        assert!(ProposalName::encode(&"x".repeat(31)).is_ok());
    }

    #[test]
    fn empty_name_is_allowed() {
        let name = ProposalName::encode("").unwrap();
        assert!(name.is_empty());
        assert_eq!(name.decode(), "");
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = ProposalName::encode("Proposal 3").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Proposal 3\"");
        let back: ProposalName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn deserializing_an_oversized_name_fails() {
        let json = format!("\"{}\"", "y".repeat(40));
        assert!(serde_json::from_str::<ProposalName>(&json).is_err());
    }
}
