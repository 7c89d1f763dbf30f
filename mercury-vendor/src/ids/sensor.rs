//! SL900A sensor and battery readings
//!
//! Both are 16-bit response words and are only ever decoded.
//!
//! # Sensor reading
//! ```text
//! 15      AD_ERROR
//! 14..10  RANGE_LIMIT
//! 9..0    VALUE
//! ```
//!
//! # Battery level reading
//! ```text
//! 15      AD_ERROR
//! 14      BATTERY_TYPE  0 = 1.5 V, 1 = 3 V
//! 13..10  RFU
//! 9..0    VALUE
//! ```

use crate::macros::packed_record;
use mercury_core::BitField;
use serde::{Deserialize, Serialize};

const AD_ERROR: BitField<u16> = BitField::new("AdError", 15, 1);
const RANGE_LIMIT: BitField<u16> = BitField::new("RangeLimit", 10, 5);
const BATTERY_TYPE: BitField<u16> = BitField::new("BatteryType", 14, 1);
const VALUE: BitField<u16> = BitField::new("Value", 0, 10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatteryType {
    OnePointFiveVolt = 0,
    ThreeVolt = 1,
}

/// Result of Get Sensor Value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct SensorReading {
    raw: u16,
}

packed_record!(SensorReading, u16, 2);

impl SensorReading {
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// The A/D conversion failed; `value` is meaningless
    pub fn ad_error(&self) -> bool {
        AD_ERROR.get_flag(self.raw)
    }

    pub fn range_limit(&self) -> u8 {
        RANGE_LIMIT.get(self.raw) as u8
    }

    pub fn value(&self) -> u16 {
        VALUE.get(self.raw)
    }
}

/// Result of Get Battery Level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct BatteryLevelReading {
    raw: u16,
}

packed_record!(BatteryLevelReading, u16, 2, 0x3C00);

impl BatteryLevelReading {
    pub fn raw(&self) -> u16 {
        self.raw
    }

    pub fn ad_error(&self) -> bool {
        AD_ERROR.get_flag(self.raw)
    }

    pub fn battery_type(&self) -> BatteryType {
        if BATTERY_TYPE.get_flag(self.raw) {
            BatteryType::ThreeVolt
        } else {
            BatteryType::OnePointFiveVolt
        }
    }

    pub fn value(&self) -> u16 {
        VALUE.get(self.raw)
    }
}
