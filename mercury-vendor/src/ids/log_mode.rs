//! SL900A log mode, sent with Set Log Mode
//!
//! ```text
//! 23..21  LOGGING_FORM
//! 20      STORAGE_RULE
//! 19      EXT1_ENABLE
//! 18      EXT2_ENABLE
//! 17      TEMP_ENABLE
//! 16      BATT_ENABLE
//! 15..1   LOG_INTERVAL  seconds between samples
//! 0       RFU
//! ```

use crate::macros::packed_record;
use mercury_core::{BitField, MercuryError, MercuryResult};
use serde::{Deserialize, Serialize};

const LOGGING_FORM: BitField<u32> = BitField::new("LoggingForm", 21, 3);
const STORAGE_RULE: BitField<u32> = BitField::new("StorageRule", 20, 1);
const EXT1_ENABLE: BitField<u32> = BitField::new("Ext1Enable", 19, 1);
const EXT2_ENABLE: BitField<u32> = BitField::new("Ext2Enable", 18, 1);
const TEMP_ENABLE: BitField<u32> = BitField::new("TempEnable", 17, 1);
const BATT_ENABLE: BitField<u32> = BitField::new("BattEnable", 16, 1);
const LOG_INTERVAL: BitField<u32> = BitField::new("LogInterval", 1, 15);

/// How samples are selected for storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoggingForm {
    /// Store every sample
    Dense = 0,
    /// Store samples outside the limits
    AllValuesOutOfLimits = 1,
    /// Store samples where a limit is crossed
    LimitsCrossing = 3,
    /// Interrupt on external input 1
    IrqExt1 = 5,
    /// Interrupt on external input 2
    IrqExt2 = 6,
    /// Interrupt on either external input
    IrqExt1Ext2 = 7,
}

impl LoggingForm {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> MercuryResult<Self> {
        match code {
            0 => Ok(LoggingForm::Dense),
            1 => Ok(LoggingForm::AllValuesOutOfLimits),
            3 => Ok(LoggingForm::LimitsCrossing),
            5 => Ok(LoggingForm::IrqExt1),
            6 => Ok(LoggingForm::IrqExt2),
            7 => Ok(LoggingForm::IrqExt1Ext2),
            _ => Err(MercuryError::InvalidData(format!(
                "Invalid logging form: {}",
                code
            ))),
        }
    }
}

/// What happens once the log memory is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageRule {
    /// Stop logging
    Normal = 0,
    /// Overwrite the oldest samples
    Rolling = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct LogMode {
    raw: u32,
}

packed_record!(LogMode, u32, 3, 0b1);

impl LogMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> u32 {
        self.raw
    }

    /// Fails only if the stored code is not a defined logging form
    pub fn logging_form(&self) -> MercuryResult<LoggingForm> {
        LoggingForm::from_code(LOGGING_FORM.get(self.raw) as u8)
    }

    pub fn set_logging_form(&mut self, form: LoggingForm) {
        // every defined code fits the 3-bit field
        let code = (form.code() as u32) << LOGGING_FORM.start();
        self.raw = (self.raw & !LOGGING_FORM.mask()) | code;
    }

    pub fn storage_rule(&self) -> StorageRule {
        if STORAGE_RULE.get_flag(self.raw) {
            StorageRule::Rolling
        } else {
            StorageRule::Normal
        }
    }

    pub fn set_storage_rule(&mut self, rule: StorageRule) {
        STORAGE_RULE.set_flag(&mut self.raw, rule == StorageRule::Rolling);
    }

    pub fn ext1_enable(&self) -> bool {
        EXT1_ENABLE.get_flag(self.raw)
    }

    pub fn set_ext1_enable(&mut self, on: bool) {
        EXT1_ENABLE.set_flag(&mut self.raw, on);
    }

    pub fn ext2_enable(&self) -> bool {
        EXT2_ENABLE.get_flag(self.raw)
    }

    pub fn set_ext2_enable(&mut self, on: bool) {
        EXT2_ENABLE.set_flag(&mut self.raw, on);
    }

    pub fn temp_enable(&self) -> bool {
        TEMP_ENABLE.get_flag(self.raw)
    }

    pub fn set_temp_enable(&mut self, on: bool) {
        TEMP_ENABLE.set_flag(&mut self.raw, on);
    }

    pub fn batt_enable(&self) -> bool {
        BATT_ENABLE.get_flag(self.raw)
    }

    pub fn set_batt_enable(&mut self, on: bool) {
        BATT_ENABLE.set_flag(&mut self.raw, on);
    }

    /// Seconds between samples
    pub fn log_interval(&self) -> u16 {
        LOG_INTERVAL.get(self.raw) as u16
    }

    /// Set the interval in seconds, 0 to 0x7FFF
    pub fn set_log_interval(&mut self, seconds: u16) -> MercuryResult<()> {
        LOG_INTERVAL.set(&mut self.raw, seconds as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_reencodes_random;
    use mercury_core::PackedRecord;

    #[test]
    fn test_layout() {
        let mut mode = LogMode::new();
        mode.set_logging_form(LoggingForm::LimitsCrossing);
        mode.set_storage_rule(StorageRule::Rolling);
        mode.set_temp_enable(true);
        mode.set_log_interval(5).unwrap();
        assert_eq!(mode.encode(), vec![0x72, 0x00, 0x0A]);

        let decoded = LogMode::decode(&[0x72, 0x00, 0x0A]).unwrap();
        assert_eq!(decoded.logging_form().unwrap(), LoggingForm::LimitsCrossing);
        assert_eq!(decoded.storage_rule(), StorageRule::Rolling);
        assert!(decoded.temp_enable());
        assert!(!decoded.ext1_enable());
        assert!(!decoded.batt_enable());
        assert_eq!(decoded.log_interval(), 5);
    }

    #[test]
    fn test_every_logging_form() {
        let forms = [
            LoggingForm::Dense,
            LoggingForm::AllValuesOutOfLimits,
            LoggingForm::LimitsCrossing,
            LoggingForm::IrqExt1,
            LoggingForm::IrqExt2,
            LoggingForm::IrqExt1Ext2,
        ];
        let mut mode = LogMode::from(0x001F_FFFE);
        for form in forms {
            mode.set_logging_form(form);
            assert_eq!(mode.logging_form().unwrap(), form);
            assert_eq!(mode.raw() & 0x001F_FFFF, 0x001F_FFFE);
        }
    }

    #[test]
    fn test_undefined_logging_form() {
        let decoded = LogMode::decode(&[0x40, 0x00, 0x00]).unwrap();
        assert!(decoded.logging_form().is_err());
    }

    #[test]
    fn test_interval_range() {
        let mut mode = LogMode::new();
        assert!(mode.set_log_interval(0x7FFF).is_ok());
        assert!(mode.set_log_interval(0x8000).is_err());
        assert_eq!(mode.log_interval(), 0x7FFF);
    }

    #[test]
    fn test_rfu_bit_dropped() {
        let decoded = LogMode::decode(&[0x00, 0x00, 0x03]).unwrap();
        assert_eq!(decoded.log_interval(), 1);
        assert_eq!(decoded.encode(), vec![0x00, 0x00, 0x02]);
    }

    #[test]
    fn test_random_reencode() {
        assert_reencodes_random::<LogMode>(0x10D);
    }

    #[test]
    fn test_padding_bits_dropped() {
        let mode = LogMode::from(u32::MAX);
        assert_eq!(mode.raw(), 0x00FF_FFFE);
        assert_eq!(LogMode::decode(&mode.encode()).unwrap(), mode);

        let parsed: LogMode = serde_json::from_str(&u32::MAX.to_string()).unwrap();
        assert_eq!(parsed, mode);
    }
}
