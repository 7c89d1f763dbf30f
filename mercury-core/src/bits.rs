//! Bit-field access over fixed-width unsigned integers
//!
//! Bit 0 is the least-significant bit of the store. A field is described by
//! its start bit and its width; values are returned right-aligned.
//!
//! Two flavours are provided:
//! - [`get_bits`] / [`set_bits`] validate the field placement at runtime.
//! - [`BitField`] descriptors are checked when they are constructed, which for
//!   `const` descriptors means at compile time, so their accessors only need to
//!   validate the written value.

use crate::error::{MercuryError, MercuryResult};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr};

/// Unsigned integer usable as the backing store of a packed record
pub trait BitStore:
    Copy
    + Eq
    + Default
    + fmt::Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of the store in bits
    const BITS: u32;
    const ZERO: Self;
    const ONES: Self;

    fn to_u64(self) -> u64;

    /// Truncating conversion from `u64`
    fn from_u64(value: u64) -> Self;
}

macro_rules! impl_bit_store {
    ($($ty:ty),*) => {
        $(
            impl BitStore for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONES: Self = <$ty>::MAX;

                fn to_u64(self) -> u64 {
                    self as u64
                }

                fn from_u64(value: u64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_bit_store!(u8, u16, u32, u64);

/// Mask of the `width` low bits of `S`
fn low_mask<S: BitStore>(width: u32) -> S {
    if width == 0 {
        S::ZERO
    } else if width >= S::BITS {
        S::ONES
    } else {
        !(S::ONES << width)
    }
}

fn check_placement<S: BitStore>(field: &'static str, start: u32, width: u32) -> MercuryResult<()> {
    if width > S::BITS || start > S::BITS - width {
        return Err(MercuryError::FieldPlacement {
            field,
            start,
            width,
            store_bits: S::BITS,
        });
    }
    Ok(())
}

// Placement must have been validated by the caller.
fn extract<S: BitStore>(store: S, start: u32, width: u32) -> S {
    if width == 0 {
        return S::ZERO;
    }
    (store >> start) & low_mask(width)
}

// Placement must have been validated by the caller.
fn insert<S: BitStore>(
    store: &mut S,
    field: &'static str,
    start: u32,
    width: u32,
    value: S,
) -> MercuryResult<()> {
    let mask = low_mask::<S>(width);
    if value & !mask != S::ZERO {
        return Err(MercuryError::FieldRange {
            field,
            value: value.to_u64(),
            width,
        });
    }
    if width == 0 {
        return Ok(());
    }
    *store = (*store & !(mask << start)) | (value << start);
    Ok(())
}

/// Read `width` bits of `store` beginning at bit `start`
///
/// # Errors
///
/// Returns `FieldPlacement` if `start + width` exceeds the width of `S`.
pub fn get_bits<S: BitStore>(store: S, start: u32, width: u32) -> MercuryResult<S> {
    check_placement::<S>("<unnamed>", start, width)?;
    Ok(extract(store, start, width))
}

/// Write `value` into `width` bits of `store` beginning at bit `start`
///
/// Bits outside `[start, start + width)` are left untouched.
///
/// # Errors
///
/// - `FieldPlacement` if `start + width` exceeds the width of `S`
/// - `FieldRange` naming `field` if `value` does not fit in `width` bits;
///   `store` is unchanged in that case
pub fn set_bits<S: BitStore>(
    store: &mut S,
    start: u32,
    width: u32,
    value: S,
    field: &'static str,
) -> MercuryResult<()> {
    check_placement::<S>(field, start, width)?;
    insert(store, field, start, width, value)
}

/// Named field descriptor over a store of type `S`
///
/// Describes a field, it does not hold a value. Construction panics if the
/// field does not fit the store; used in a `const` item that panic becomes a
/// compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField<S> {
    name: &'static str,
    start: u32,
    width: u32,
    store: PhantomData<S>,
}

impl<S: BitStore> BitField<S> {
    pub const fn new(name: &'static str, start: u32, width: u32) -> Self {
        assert!(
            width <= S::BITS && start <= S::BITS - width,
            "bit field does not fit its backing store"
        );
        Self {
            name,
            start,
            width,
            store: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// First bit above the field
    pub fn end(&self) -> u32 {
        self.start + self.width
    }

    /// In-place mask covering the field
    pub fn mask(&self) -> S {
        if self.width == 0 {
            return S::ZERO;
        }
        low_mask::<S>(self.width) << self.start
    }

    pub fn get(&self, store: S) -> S {
        extract(store, self.start, self.width)
    }

    /// Write `value` into the field, leaving every other bit untouched
    ///
    /// # Errors
    ///
    /// Returns `FieldRange` if `value` is wider than the field.
    pub fn set(&self, store: &mut S, value: S) -> MercuryResult<()> {
        insert(store, self.name, self.start, self.width, value)
    }

    /// True if any bit of the field is set
    pub fn get_flag(&self, store: S) -> bool {
        self.get(store) != S::ZERO
    }

    /// Set or clear the lowest bit of the field; intended for 1-bit fields
    pub fn set_flag(&self, store: &mut S, on: bool) {
        if self.width == 0 {
            return;
        }
        let bit = (S::from_u64(on as u64) << self.start) & self.mask();
        *store = (*store & !self.mask()) | bit;
    }
}

/// Right-align a big-endian byte buffer into a store
///
/// The first byte of `bytes` becomes the most significant of the bits used;
/// unused high bits of the store are zero.
///
/// # Errors
///
/// Returns `InvalidData` if `bytes` is wider than `S`.
pub fn store_from_be_bytes<S: BitStore>(bytes: &[u8]) -> MercuryResult<S> {
    if bytes.len() * 8 > S::BITS as usize {
        return Err(MercuryError::InvalidData(format!(
            "{} bytes do not fit a {}-bit store",
            bytes.len(),
            S::BITS
        )));
    }
    let value = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
    Ok(S::from_u64(value))
}

/// Serialize the low `out.len()` bytes of `store` into `out`, big-endian
///
/// # Errors
///
/// Returns `InvalidData` if `out` is wider than `S`.
pub fn store_to_be_bytes<S: BitStore>(store: S, out: &mut [u8]) -> MercuryResult<()> {
    if out.len() * 8 > S::BITS as usize {
        return Err(MercuryError::InvalidData(format!(
            "{} bytes do not fit a {}-bit store",
            out.len(),
            S::BITS
        )));
    }
    let value = store.to_u64();
    let len = out.len();
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (value >> (8 * (len - 1 - i))) as u8;
    }
    Ok(())
}
