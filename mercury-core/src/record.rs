//! Fixed-length packed records
//!
//! A packed record is a byte buffer of fixed length whose bits are split into
//! named fields. The buffer is right-aligned, big-endian, into an unsigned
//! integer store and every field is addressed through a [`BitField`]
//! descriptor over that store.
//!
//! [`BitField`]: crate::bits::BitField

use crate::bits::{store_from_be_bytes, BitStore};
use crate::error::{MercuryError, MercuryResult};

/// Record backed by a single integer store
///
/// Implementors supply the layout constants and the store conversion; decoding
/// and encoding are provided.
///
/// # Reserved bits
///
/// Bits set in [`RESERVED_MASK`](PackedRecord::RESERVED_MASK) are cleared on
/// decode and never encoded. Read-only fields are not reserved: they decode
/// as read and are written back unchanged, they simply have no setter.
pub trait PackedRecord: Sized {
    /// Record name used in error messages
    const NAME: &'static str;

    /// Exact encoded length in bytes; must not exceed the store width
    const LENGTH: usize;

    type Store: BitStore;

    const RESERVED_MASK: Self::Store = <Self::Store as BitStore>::ZERO;

    fn from_store(store: Self::Store) -> Self;

    fn store(&self) -> Self::Store;

    /// Store bits that belong to the record
    ///
    /// The low `LENGTH * 8` bits of the store, less the reserved bits.
    /// Padding above the record and reserved bits are never carried.
    fn record_mask() -> Self::Store {
        let bits = <Self::Store as BitStore>::BITS;
        let padding = bits.saturating_sub(Self::LENGTH as u32 * 8);
        if padding >= bits {
            return <Self::Store as BitStore>::ZERO;
        }
        (<Self::Store as BitStore>::ONES >> padding) & !Self::RESERVED_MASK
    }

    /// Decode a record from exactly [`LENGTH`](PackedRecord::LENGTH) bytes
    ///
    /// # Errors
    ///
    /// Returns `RecordLength` if `bytes` has any other length.
    fn decode(bytes: &[u8]) -> MercuryResult<Self> {
        if bytes.len() != Self::LENGTH {
            log::debug!(
                "Rejecting {}: expected {} bytes, got {}",
                Self::NAME,
                Self::LENGTH,
                bytes.len()
            );
            return Err(MercuryError::RecordLength {
                record: Self::NAME,
                expected: Self::LENGTH,
                actual: bytes.len(),
            });
        }
        let store: Self::Store = store_from_be_bytes(bytes)?;
        log::trace!("Decoded {} from {} bytes", Self::NAME, bytes.len());
        Ok(Self::from_store(store & Self::record_mask()))
    }

    /// Encode the record to exactly [`LENGTH`](PackedRecord::LENGTH) bytes
    fn encode(&self) -> Vec<u8> {
        let value = (self.store() & Self::record_mask()).to_u64();
        (0..Self::LENGTH)
            .rev()
            .map(|i| (value >> (8 * i)) as u8)
            .collect()
    }

    /// Encode the record into a caller-provided buffer
    ///
    /// # Errors
    ///
    /// Returns `RecordLength` if `out` is not exactly
    /// [`LENGTH`](PackedRecord::LENGTH) bytes long.
    fn encode_into(&self, out: &mut [u8]) -> MercuryResult<()> {
        if out.len() != Self::LENGTH {
            return Err(MercuryError::RecordLength {
                record: Self::NAME,
                expected: Self::LENGTH,
                actual: out.len(),
            });
        }
        out.copy_from_slice(&self.encode());
        Ok(())
    }
}
