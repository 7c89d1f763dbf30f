//! Mercury - RFID tag codec
//!
//! Pure data-layer building blocks for talking to UHF Gen2 tags: no I/O and
//! no shared state, so every value is safe to use from any thread.
//!
//! # Architecture
//!
//! - `mercury-core`: error type, bit-field accessor, packed record trait,
//!   fixed-length credentials
//! - `mercury-gen2`: memory banks, lock actions, Select matching, tag filters
//! - `mercury-vendor`: IDS SL900A, NXP G2iL and Impinj Monza 4 records and
//!   custom tag operations
//!
//! # Usage
//!
//! ```
//! use mercury::gen2::{Bank, LockAction, Select};
//!
//! let action: LockAction = "EPC_LOCK,USER_PERMALOCK".parse().unwrap();
//! assert_eq!(action.to_string(), "EPC_LOCK,USER_PERMALOCK");
//!
//! let select = Select::new(false, Bank::Epc, 32, 8, vec![0xAB]).unwrap();
//! assert!(select.matches(&[0xAB, 0xCD]).unwrap());
//! ```

// Re-export core types
pub use mercury_core::{
    get_bits, set_bits, AesKey, AuthToken, BitField, BitStore, MercuryError, MercuryResult,
    PackedRecord, TagSerial,
};

// Re-export Gen2 API
pub mod gen2 {
    pub use mercury_gen2::*;
}

// Re-export vendor records
pub mod vendor {
    pub use mercury_vendor::*;
}
