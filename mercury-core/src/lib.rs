//! Core types and utilities for the Mercury RFID tag codec
//!
//! This crate provides the error type, the bit-field accessor and the packed
//! record trait used by the Gen2 and vendor crates. Everything here is pure:
//! no I/O, no shared state.

pub mod error;
pub mod bits;
pub mod record;
pub mod fixed;

pub use error::{MercuryError, MercuryResult};
pub use bits::{get_bits, set_bits, store_from_be_bytes, store_to_be_bytes, BitField, BitStore};
pub use record::PackedRecord;
pub use fixed::{AesKey, AuthToken, TagSerial};
