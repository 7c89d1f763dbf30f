//! SL900A calibration data
//!
//! Seven bytes, read with Get Calibration Data and written with Set
//! Calibration Data. Bit offsets below count from the LSB of the 56-bit
//! record:
//!
//! ```text
//! 55..51  AD1        (read-only)
//! 50..48  COARSE1
//! 47..43  AD2        (read-only)
//! 42..40  COARSE2
//! 39      GND_SWITCH
//! 38..37  SELP12
//! 36..32  ADF        (read-only)
//! 31..24  DF
//! 23      SW_EXT_EN
//! 22..21  SELP22
//! 20..19  IRLEV
//! 18..14  RING_CAL   (read-only)
//! 13..7   OFF_INT    (read-only)
//! 6..3    REFTC      (read-only)
//! 2       EXC_RES
//! 1..0    RFU
//! ```
//!
//! Read-only fields are factory trimmed. They are kept as read so that a
//! decode/modify/encode cycle writes them back unchanged.

use crate::macros::packed_record;
use mercury_core::{BitField, MercuryResult};
use serde::{Deserialize, Serialize};

const AD1: BitField<u64> = BitField::new("Ad1", 51, 5);
const COARSE1: BitField<u64> = BitField::new("Coarse1", 48, 3);
const AD2: BitField<u64> = BitField::new("Ad2", 43, 5);
const COARSE2: BitField<u64> = BitField::new("Coarse2", 40, 3);
const GND_SWITCH: BitField<u64> = BitField::new("GndSwitch", 39, 1);
const SELP12: BitField<u64> = BitField::new("Selp12", 37, 2);
const ADF: BitField<u64> = BitField::new("Adf", 32, 5);
const DF: BitField<u64> = BitField::new("Df", 24, 8);
const SW_EXT_EN: BitField<u64> = BitField::new("SwExtEn", 23, 1);
const SELP22: BitField<u64> = BitField::new("Selp22", 21, 2);
const IRLEV: BitField<u64> = BitField::new("Irlev", 19, 2);
const RING_CAL: BitField<u64> = BitField::new("RingCal", 14, 5);
const OFF_INT: BitField<u64> = BitField::new("OffInt", 7, 7);
const REFTC: BitField<u64> = BitField::new("Reftc", 3, 4);
const EXC_RES: BitField<u64> = BitField::new("ExcRes", 2, 1);

/// SL900A calibration block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct CalibrationData {
    raw: u64,
}

// Bits 1..0 are RFU.
packed_record!(CalibrationData, u64, 7, 0b11);

impl CalibrationData {
    /// Create a calibration block with every field zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Backing store; the record occupies the low 56 bits
    pub fn raw(&self) -> u64 {
        self.raw
    }

    /// AD1 converter trim (read-only)
    pub fn ad1(&self) -> u8 {
        AD1.get(self.raw) as u8
    }

    /// Coarse range of the first A/D reference
    pub fn coarse1(&self) -> u8 {
        COARSE1.get(self.raw) as u8
    }

    pub fn set_coarse1(&mut self, value: u8) -> MercuryResult<()> {
        COARSE1.set(&mut self.raw, value as u64)
    }

    /// AD2 converter trim (read-only)
    pub fn ad2(&self) -> u8 {
        AD2.get(self.raw) as u8
    }

    /// Coarse range of the second A/D reference
    pub fn coarse2(&self) -> u8 {
        COARSE2.get(self.raw) as u8
    }

    pub fn set_coarse2(&mut self, value: u8) -> MercuryResult<()> {
        COARSE2.set(&mut self.raw, value as u64)
    }

    /// Ground switch enable
    pub fn gnd_switch(&self) -> bool {
        GND_SWITCH.get_flag(self.raw)
    }

    pub fn set_gnd_switch(&mut self, on: bool) {
        GND_SWITCH.set_flag(&mut self.raw, on);
    }

    pub fn selp12(&self) -> u8 {
        SELP12.get(self.raw) as u8
    }

    pub fn set_selp12(&mut self, value: u8) -> MercuryResult<()> {
        SELP12.set(&mut self.raw, value as u64)
    }

    /// Temperature converter slope trim (read-only)
    pub fn adf(&self) -> u8 {
        ADF.get(self.raw) as u8
    }

    /// Temperature converter offset
    pub fn df(&self) -> u8 {
        DF.get(self.raw) as u8
    }

    pub fn set_df(&mut self, value: u8) -> MercuryResult<()> {
        DF.set(&mut self.raw, value as u64)
    }

    /// External switch enable
    pub fn sw_ext_en(&self) -> bool {
        SW_EXT_EN.get_flag(self.raw)
    }

    pub fn set_sw_ext_en(&mut self, on: bool) {
        SW_EXT_EN.set_flag(&mut self.raw, on);
    }

    pub fn selp22(&self) -> u8 {
        SELP22.get(self.raw) as u8
    }

    pub fn set_selp22(&mut self, value: u8) -> MercuryResult<()> {
        SELP22.set(&mut self.raw, value as u64)
    }

    /// Reference current level
    pub fn irlev(&self) -> u8 {
        IRLEV.get(self.raw) as u8
    }

    pub fn set_irlev(&mut self, value: u8) -> MercuryResult<()> {
        IRLEV.set(&mut self.raw, value as u64)
    }

    /// Ring oscillator trim (read-only)
    pub fn ring_cal(&self) -> u8 {
        RING_CAL.get(self.raw) as u8
    }

    /// Internal offset trim (read-only)
    pub fn off_int(&self) -> u8 {
        OFF_INT.get(self.raw) as u8
    }

    /// Reference temperature coefficient (read-only)
    pub fn reftc(&self) -> u8 {
        REFTC.get(self.raw) as u8
    }

    /// Excitation resistor enable
    pub fn exc_res(&self) -> bool {
        EXC_RES.get_flag(self.raw)
    }

    pub fn set_exc_res(&mut self, on: bool) {
        EXC_RES.set_flag(&mut self.raw, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_reencodes_random;
    use mercury_core::{MercuryError, PackedRecord};

    #[test]
    fn test_decode_fields() {
        // AD1=0x1F COARSE1=0 | AD2=0 COARSE2=7 | GND=1 SELP12=3 ADF=0x15 | DF=0xA5
        // SW_EXT_EN=1 SELP22=2 IRLEV=1 RING_CAL=0x11 | OFF_INT=0x55 REFTC=0xA EXC_RES=1 RFU=3
        let bytes = [0xF8, 0x07, 0xF5, 0xA5, 0xCC, 0x6A, 0xD7];
        let cal = CalibrationData::decode(&bytes).unwrap();
        assert_eq!(cal.ad1(), 0x1F);
        assert_eq!(cal.coarse1(), 0);
        assert_eq!(cal.ad2(), 0);
        assert_eq!(cal.coarse2(), 7);
        assert!(cal.gnd_switch());
        assert_eq!(cal.selp12(), 3);
        assert_eq!(cal.adf(), 0x15);
        assert_eq!(cal.df(), 0xA5);
        assert!(cal.sw_ext_en());
        assert_eq!(cal.selp22(), 2);
        assert_eq!(cal.irlev(), 1);
        assert_eq!(cal.ring_cal(), 0x11);
        assert_eq!(cal.off_int(), 0x55);
        assert_eq!(cal.reftc(), 0xA);
        assert!(cal.exc_res());
    }

    #[test]
    fn test_round_trip_clears_rfu_only() {
        let bytes = [0xF8, 0x07, 0xF5, 0xA5, 0xCC, 0x6A, 0xD7];
        let cal = CalibrationData::decode(&bytes).unwrap();
        assert_eq!(cal.encode(), vec![0xF8, 0x07, 0xF5, 0xA5, 0xCC, 0x6A, 0xD4]);

        let clean = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDC];
        assert_eq!(CalibrationData::decode(&clean).unwrap().encode(), clean.to_vec());
    }

    #[test]
    fn test_modify_preserves_read_only() {
        let bytes = [0xF8, 0x07, 0xF5, 0xA5, 0xCC, 0x6A, 0xD4];
        let mut cal = CalibrationData::decode(&bytes).unwrap();
        cal.set_df(0x00).unwrap();
        cal.set_coarse1(5).unwrap();
        cal.set_exc_res(false);

        assert_eq!(cal.ad1(), 0x1F);
        assert_eq!(cal.adf(), 0x15);
        assert_eq!(cal.off_int(), 0x55);
        assert_eq!(cal.encode(), vec![0xFD, 0x07, 0xF5, 0x00, 0xCC, 0x6A, 0xD0]);
    }

    #[test]
    fn test_setter_range() {
        let mut cal = CalibrationData::new();
        assert!(matches!(
            cal.set_coarse2(8),
            Err(MercuryError::FieldRange { field: "Coarse2", .. })
        ));
        assert!(cal.set_irlev(4).is_err());
        assert_eq!(cal.raw(), 0);
    }

    #[test]
    fn test_wrong_length() {
        assert!(matches!(
            CalibrationData::decode(&[0u8; 8]),
            Err(MercuryError::RecordLength {
                expected: 7,
                actual: 8,
                ..
            })
        ));
    }

    #[test]
    fn test_random_reencode() {
        assert_reencodes_random::<CalibrationData>(0xCA1);
    }

    #[test]
    fn test_padding_bits_dropped() {
        let cal = CalibrationData::from(u64::MAX);
        assert_eq!(cal.raw(), 0x00FF_FFFF_FFFF_FFFC);
        assert_eq!(CalibrationData::decode(&cal.encode()).unwrap(), cal);

        let parsed: CalibrationData = serde_json::from_str(&u64::MAX.to_string()).unwrap();
        assert_eq!(parsed, cal);
    }
}
