//! Tag identifier data

use serde::{Deserialize, Serialize};
use std::fmt;

/// EPC identifier bytes of a tag
///
/// Also usable as a filter that matches only the identical identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TagData {
    #[serde(with = "serde_bytes")]
    epc: Vec<u8>,
}

impl TagData {
    pub fn new(epc: impl Into<Vec<u8>>) -> Self {
        Self { epc: epc.into() }
    }

    /// Borrow the identifier bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.epc
    }

    /// Get a copy of the identifier bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.epc.clone()
    }

    /// Identifier length in bits
    pub fn bit_len(&self) -> usize {
        self.epc.len() * 8
    }

    /// True if `epc` is exactly this identifier
    pub fn matches(&self, epc: &[u8]) -> bool {
        self.epc == epc
    }
}

impl From<Vec<u8>> for TagData {
    fn from(epc: Vec<u8>) -> Self {
        Self { epc }
    }
}

impl fmt::Display for TagData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.epc {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}
