//! Gen2 tag memory banks

use mercury_core::{MercuryError, MercuryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gen2 memory bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    /// Kill and access passwords
    Reserved = 0,
    /// CRC, protocol control and the EPC identifier
    Epc = 1,
    /// Tag identifier (chip vendor and model)
    Tid = 2,
    /// User memory
    User = 3,
}

impl Bank {
    /// Get bank code
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Get bank from code
    pub fn from_code(code: u8) -> MercuryResult<Self> {
        match code {
            0 => Ok(Bank::Reserved),
            1 => Ok(Bank::Epc),
            2 => Ok(Bank::Tid),
            3 => Ok(Bank::User),
            _ => Err(MercuryError::InvalidData(format!("Invalid bank code: {}", code))),
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bank::Reserved => "RESERVED",
            Bank::Epc => "EPC",
            Bank::Tid => "TID",
            Bank::User => "USER",
        };
        f.write_str(name)
    }
}
