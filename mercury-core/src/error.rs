use thiserror::Error;

/// Main error type for Mercury codec operations
///
/// Every error is raised at the operation that caused it. A failed
/// construction or decode never yields a usable value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MercuryError {
    #[error("Value 0x{value:X} does not fit the {width}-bit field '{field}'")]
    FieldRange {
        field: &'static str,
        value: u64,
        width: u32,
    },

    #[error("Field '{field}' at bit {start} with width {width} exceeds a {store_bits}-bit store")]
    FieldPlacement {
        field: &'static str,
        start: u32,
        width: u32,
        store_bits: u32,
    },

    #[error("{record} requires exactly {expected} bytes, got {actual}")]
    RecordLength {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown lock action: {0}")]
    UnknownLockAction(String),

    #[error("Matching is not supported against bank {0}")]
    UnsupportedBank(String),

    #[error("Bank {0} cannot be used for selection")]
    InvalidBank(String),

    #[error("Mask holds {available} bits but the bit length is {bit_length}")]
    MaskLength { bit_length: u16, available: usize },

    #[error("{what} must be exactly {expected} bytes, got {actual}")]
    FixedLengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for Mercury codec operations
pub type MercuryResult<T> = Result<T, MercuryError>;
