//! Gen2 lock actions and tag selection for the Mercury RFID tag codec
//!
//! - `bank`: Gen2 memory banks
//! - `lock`: lock action algebra (mask/action pairs, name parsing and formatting)
//! - `select`: Select mask matching against EPC identifiers
//! - `tag`: tag identifier data
//! - `filter`: composite tag filters

pub mod bank;
pub mod lock;
pub mod select;
pub mod tag;
pub mod filter;

pub use bank::Bank;
pub use lock::{lock_bits, LockAction};
pub use select::{Select, EPC_HEADER_BITS};
pub use tag::TagData;
pub use filter::TagFilter;
