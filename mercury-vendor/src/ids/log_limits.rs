//! SL900A log limits
//!
//! Five bytes holding four 10-bit temperature limits, most significant first:
//! extreme lower, lower, upper, extreme upper.

use crate::macros::packed_record;
use mercury_core::{BitField, MercuryResult};
use serde::{Deserialize, Serialize};

const EXTREME_LOWER: BitField<u64> = BitField::new("ExtremeLowerLimit", 30, 10);
const LOWER: BitField<u64> = BitField::new("LowerLimit", 20, 10);
const UPPER: BitField<u64> = BitField::new("UpperLimit", 10, 10);
const EXTREME_UPPER: BitField<u64> = BitField::new("ExtremeUpperLimit", 0, 10);

/// SL900A log limits block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct LogLimits {
    raw: u64,
}

packed_record!(LogLimits, u64, 5);

impl LogLimits {
    /// Build a limits block from the four raw 10-bit limits
    ///
    /// # Errors
    ///
    /// Returns `FieldRange` if any limit exceeds 0x3FF.
    pub fn new(
        extreme_lower: u16,
        lower: u16,
        upper: u16,
        extreme_upper: u16,
    ) -> MercuryResult<Self> {
        let mut limits = Self::default();
        limits.set_extreme_lower_limit(extreme_lower)?;
        limits.set_lower_limit(lower)?;
        limits.set_upper_limit(upper)?;
        limits.set_extreme_upper_limit(extreme_upper)?;
        Ok(limits)
    }

    pub fn raw(&self) -> u64 {
        self.raw
    }

    pub fn extreme_lower_limit(&self) -> u16 {
        EXTREME_LOWER.get(self.raw) as u16
    }

    pub fn set_extreme_lower_limit(&mut self, value: u16) -> MercuryResult<()> {
        EXTREME_LOWER.set(&mut self.raw, value as u64)
    }

    pub fn lower_limit(&self) -> u16 {
        LOWER.get(self.raw) as u16
    }

    pub fn set_lower_limit(&mut self, value: u16) -> MercuryResult<()> {
        LOWER.set(&mut self.raw, value as u64)
    }

    pub fn upper_limit(&self) -> u16 {
        UPPER.get(self.raw) as u16
    }

    pub fn set_upper_limit(&mut self, value: u16) -> MercuryResult<()> {
        UPPER.set(&mut self.raw, value as u64)
    }

    pub fn extreme_upper_limit(&self) -> u16 {
        EXTREME_UPPER.get(self.raw) as u16
    }

    pub fn set_extreme_upper_limit(&mut self, value: u16) -> MercuryResult<()> {
        EXTREME_UPPER.set(&mut self.raw, value as u64)
    }
}
