//! Content-addressed hash type using SHA-1

use crate::{Error, Result};
use sha1::{Digest, Sha1};
use std::fmt;

/// Length of a hash rendered as hex
pub const HEX_LEN: usize = 40;

/// A 20-byte SHA-1 digest of an object's canonical form
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHash([u8; 20]);

impl ObjectHash {
    /// Create a hash from raw bytes
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        ObjectHash(bytes)
    }

    /// Hash arbitrary data
    pub fn digest(data: &[u8]) -> Self {
        ObjectHash(Sha1::digest(data).into())
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Convert to lowercase hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 40 character hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != HEX_LEN {
            return Err(Error::InvalidHash(format!(
                "expected {} characters, got {}",
                HEX_LEN,
                s.len()
            )));
        }
        let mut arr = [0u8; 20];
        hex::decode_to_slice(s, &mut arr)
            .map_err(|e| Error::InvalidHash(format!("{}: {}", s, e)))?;
        Ok(ObjectHash(arr))
    }

    /// Get a short prefix for display (first 7 chars, like git)
    pub fn short(&self) -> String {
        self.to_hex()[..7].to_string()
    }
}

/// Check that `s` is usable as a store key: 40 lowercase hex characters
pub fn validate_hex(s: &str) -> Result<()> {
    if s.len() != HEX_LEN {
        return Err(Error::InvalidHash(format!(
            "expected {} characters, got {}",
            HEX_LEN,
            s.len()
        )));
    }
    if let Some(c) = s
        .chars()
        .find(|c| !matches!(c, '0'..='9' | 'a'..='f'))
    {
        return Err(Error::InvalidHash(format!(
            "{}: unexpected character {:?}",
            s, c
        )));
    }
    Ok(())
}

impl fmt::Display for ObjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for ObjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectHash({})", self.short())
    }
}

impl std::str::FromStr for ObjectHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for ObjectHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_digest() {
        let h1 = ObjectHash::digest(b"hello");
        let h2 = ObjectHash::digest(b"hello");
        let h3 = ObjectHash::digest(b"world");

        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_known_sha1_vectors() {
        assert_eq!(
            ObjectHash::digest(b"").to_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            ObjectHash::digest(b"abc").to_hex(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn test_hash_hex_roundtrip() {
        let h1 = ObjectHash::digest(b"test data");
        let hex = h1.to_hex();
        assert_eq!(hex.len(), HEX_LEN);
        let h2 = ObjectHash::from_hex(&hex).unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            ObjectHash::from_hex("abc"),
            Err(Error::InvalidHash(_))
        ));
        assert!(matches!(
            ObjectHash::from_hex(&"z".repeat(40)),
            Err(Error::InvalidHash(_))
        ));
    }

    #[test]
    fn test_validate_hex() {
        assert!(validate_hex("ce013625030ba8dba906f756967f9e9ca394464a").is_ok());
        assert!(validate_hex("ce013625030ba8dba906f756967f9e9ca394464").is_err());
        assert!(validate_hex("CE013625030BA8DBA906F756967F9E9CA394464A").is_err());
        assert!(validate_hex("").is_err());
    }

    #[test]
    fn test_hash_short() {
        let h = ObjectHash::digest(b"test");
        assert_eq!(h.short().len(), 7);
        assert!(h.to_hex().starts_with(&h.short()));
    }
}
