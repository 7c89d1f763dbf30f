//! Fixed-length byte values such as keys and tokens
//!
//! Each type wraps an array of its exact length. Construction from a slice of
//! any other length fails with `FixedLengthMismatch`.

use crate::error::{MercuryError, MercuryResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr, $what:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            bytes: [u8; $len],
        }

        impl $name {
            pub const LENGTH: usize = $len;

            pub fn new(bytes: [u8; $len]) -> Self {
                Self { bytes }
            }

            /// Copy a slice of exactly the required length
            ///
            /// # Errors
            ///
            /// Returns `FixedLengthMismatch` for any other length.
            pub fn from_slice(bytes: &[u8]) -> MercuryResult<Self> {
                let bytes: [u8; $len] = bytes.try_into().map_err(|_| {
                    log::debug!("Rejecting {}: got {} bytes", $what, bytes.len());
                    MercuryError::FixedLengthMismatch {
                        what: $what,
                        expected: $len,
                        actual: bytes.len(),
                    }
                })?;
                Ok(Self { bytes })
            }

            /// Borrow the bytes
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.bytes
            }

            /// Get a copy of the bytes
            pub fn to_array(&self) -> [u8; $len] {
                self.bytes
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = MercuryError;

            fn try_from(bytes: &[u8]) -> MercuryResult<Self> {
                Self::from_slice(bytes)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self::new(bytes)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("len", &$len)
                    .finish_non_exhaustive()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde_bytes::serialize(self.bytes.as_slice(), serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let buf: serde_bytes::ByteBuf = serde_bytes::deserialize(deserializer)?;
                Self::from_slice(buf.as_slice()).map_err(serde::de::Error::custom)
            }
        }
    };
}

fixed_bytes!(
    /// AES-128 key used by tag authentication commands
    AesKey,
    16,
    "AES key"
);

fixed_bytes!(
    /// 64-bit token exchanged by secure-mode activation commands
    AuthToken,
    8,
    "Authentication token"
);

fixed_bytes!(
    /// 48-bit tag serial number
    TagSerial,
    6,
    "Tag serial"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length_accepted() {
        let key = AesKey::from_slice(&[0x11; 16]).unwrap();
        assert_eq!(key.as_bytes(), &[0x11; 16]);
        assert_eq!(key.to_array(), [0x11; 16]);

        let token = AuthToken::try_from(&[1, 2, 3, 4, 5, 6, 7, 8][..]).unwrap();
        assert_eq!(token.as_bytes()[7], 8);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(
            AesKey::from_slice(&[0u8; 15]).unwrap_err(),
            MercuryError::FixedLengthMismatch {
                what: "AES key",
                expected: 16,
                actual: 15
            }
        );
        assert!(AuthToken::from_slice(&[0u8; 9]).is_err());
        assert!(TagSerial::from_slice(&[]).is_err());
        assert!(TagSerial::from_slice(&[0u8; 6]).is_ok());
    }

    #[test]
    fn test_debug_hides_bytes() {
        let key = AesKey::new([0xAB; 16]);
        let text = format!("{:?}", key);
        assert_eq!(text, "AesKey { len: 16, .. }");
    }

    #[test]
    fn test_serde_validates_length() {
        let serial = TagSerial::new([1, 2, 3, 4, 5, 6]);
        let json = serde_json::to_string(&serial).unwrap();
        assert_eq!(json, "[1,2,3,4,5,6]");
        assert_eq!(serde_json::from_str::<TagSerial>(&json).unwrap(), serial);
        assert!(serde_json::from_str::<TagSerial>("[1,2,3]").is_err());
    }
}
