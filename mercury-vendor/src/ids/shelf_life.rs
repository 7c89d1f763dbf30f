//! SL900A shelf-life parameters
//!
//! Written with Set Shelf Life as two 32-bit blocks.
//!
//! # Block 0
//! ```text
//! 31..24  TMAX    maximum temperature
//! 23..16  TMIN    minimum temperature
//! 15..8   TSTD    standard storage temperature
//! 7..0    EA      activation energy
//! ```
//!
//! # Block 1
//! ```text
//! 31..16  SLINIT           initial shelf life
//! 15..6   TINIT            initial temperature
//! 5..4    SENSOR_ID
//! 3       ENABLE_NEGATIVE  allow negative shelf life
//! 2       ALGORITHM_ENABLE
//! 1..0    RFU
//! ```

use crate::macros::packed_record;
use mercury_core::{BitField, MercuryResult};
use serde::{Deserialize, Serialize};

const TMAX: BitField<u32> = BitField::new("Tmax", 24, 8);
const TMIN: BitField<u32> = BitField::new("Tmin", 16, 8);
const TSTD: BitField<u32> = BitField::new("Tstd", 8, 8);
const EA: BitField<u32> = BitField::new("Ea", 0, 8);

const SL_INIT: BitField<u32> = BitField::new("SlInit", 16, 16);
const T_INIT: BitField<u32> = BitField::new("Tinit", 6, 10);
const SENSOR_ID: BitField<u32> = BitField::new("SensorId", 4, 2);
const ENABLE_NEGATIVE: BitField<u32> = BitField::new("EnableNegative", 3, 1);
const ALGORITHM_ENABLE: BitField<u32> = BitField::new("AlgorithmEnable", 2, 1);

/// Shelf-life block 0: temperature bounds and activation energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ShelfLifeBlock0 {
    raw: u32,
}

packed_record!(ShelfLifeBlock0, u32, 4);

impl ShelfLifeBlock0 {
    pub fn new(tmax: u8, tmin: u8, tstd: u8, ea: u8) -> Self {
        let raw = (tmax as u32) << TMAX.start()
            | (tmin as u32) << TMIN.start()
            | (tstd as u32) << TSTD.start()
            | (ea as u32) << EA.start();
        Self { raw }
    }

    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn tmax(&self) -> u8 {
        TMAX.get(self.raw) as u8
    }

    pub fn set_tmax(&mut self, value: u8) -> MercuryResult<()> {
        TMAX.set(&mut self.raw, value as u32)
    }

    pub fn tmin(&self) -> u8 {
        TMIN.get(self.raw) as u8
    }

    pub fn set_tmin(&mut self, value: u8) -> MercuryResult<()> {
        TMIN.set(&mut self.raw, value as u32)
    }

    pub fn tstd(&self) -> u8 {
        TSTD.get(self.raw) as u8
    }

    pub fn set_tstd(&mut self, value: u8) -> MercuryResult<()> {
        TSTD.set(&mut self.raw, value as u32)
    }

    pub fn ea(&self) -> u8 {
        EA.get(self.raw) as u8
    }

    pub fn set_ea(&mut self, value: u8) -> MercuryResult<()> {
        EA.set(&mut self.raw, value as u32)
    }
}

/// Shelf-life block 1: initial state and algorithm switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ShelfLifeBlock1 {
    raw: u32,
}

// Bits 1..0 are RFU and always zero.
packed_record!(ShelfLifeBlock1, u32, 4, 0b11);

impl ShelfLifeBlock1 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn sl_init(&self) -> u16 {
        SL_INIT.get(self.raw) as u16
    }

    pub fn set_sl_init(&mut self, value: u16) -> MercuryResult<()> {
        SL_INIT.set(&mut self.raw, value as u32)
    }

    pub fn t_init(&self) -> u16 {
        T_INIT.get(self.raw) as u16
    }

    pub fn set_t_init(&mut self, value: u16) -> MercuryResult<()> {
        T_INIT.set(&mut self.raw, value as u32)
    }

    pub fn sensor_id(&self) -> u8 {
        SENSOR_ID.get(self.raw) as u8
    }

    pub fn set_sensor_id(&mut self, value: u8) -> MercuryResult<()> {
        SENSOR_ID.set(&mut self.raw, value as u32)
    }

    pub fn enable_negative(&self) -> bool {
        ENABLE_NEGATIVE.get_flag(self.raw)
    }

    pub fn set_enable_negative(&mut self, on: bool) {
        ENABLE_NEGATIVE.set_flag(&mut self.raw, on);
    }

    pub fn algorithm_enable(&self) -> bool {
        ALGORITHM_ENABLE.get_flag(self.raw)
    }

    pub fn set_algorithm_enable(&mut self, on: bool) {
        ALGORITHM_ENABLE.set_flag(&mut self.raw, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_reencodes_random;
    use mercury_core::PackedRecord;

    #[test]
    fn test_block0_layout() {
        let block = ShelfLifeBlock0::new(0x46, 0x0A, 0x19, 0x7F);
        assert_eq!(block.encode(), vec![0x46, 0x0A, 0x19, 0x7F]);

        let decoded = ShelfLifeBlock0::decode(&[0x46, 0x0A, 0x19, 0x7F]).unwrap();
        assert_eq!(decoded.tmax(), 0x46);
        assert_eq!(decoded.tmin(), 0x0A);
        assert_eq!(decoded.tstd(), 0x19);
        assert_eq!(decoded.ea(), 0x7F);
    }

    #[test]
    fn test_block0_setters() {
        let mut block = ShelfLifeBlock0::default();
        block.set_tstd(0xFF).unwrap();
        assert_eq!(block.raw(), 0x0000_FF00);
    }

    #[test]
    fn test_block1_layout() {
        let mut block = ShelfLifeBlock1::new();
        block.set_sl_init(0xABCD).unwrap();
        block.set_t_init(0x3FF).unwrap();
        block.set_sensor_id(2).unwrap();
        block.set_enable_negative(true);
        block.set_algorithm_enable(false);
        assert_eq!(block.encode(), vec![0xAB, 0xCD, 0xFF, 0xE8]);
    }

    #[test]
    fn test_block1_rfu_forced_zero() {
        let decoded = ShelfLifeBlock1::decode(&[0x00, 0x01, 0x00, 0x47]).unwrap();
        assert_eq!(decoded.sl_init(), 1);
        assert_eq!(decoded.t_init(), 1);
        assert_eq!(decoded.sensor_id(), 0);
        assert!(!decoded.enable_negative());
        assert!(decoded.algorithm_enable());
        assert_eq!(decoded.encode(), vec![0x00, 0x01, 0x00, 0x44]);

        let from_raw = ShelfLifeBlock1::from(0xFFFF_FFFF);
        assert_eq!(from_raw.raw(), 0xFFFF_FFFC);
    }

    #[test]
    fn test_block1_range() {
        let mut block = ShelfLifeBlock1::new();
        assert!(block.set_t_init(0x400).is_err());
        assert!(block.set_sensor_id(4).is_err());
    }

    #[test]
    fn test_random_reencode() {
        assert_reencodes_random::<ShelfLifeBlock0>(0x5E0);
        assert_reencodes_random::<ShelfLifeBlock1>(0x5E1);
    }
}
