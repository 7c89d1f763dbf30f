//! NXP G2iL/G2iM configuration word
//!
//! Written with the ChangeConfig custom command. Each flag occupies one bit;
//! bits 1..0 are reserved.
//!
//! ```text
//! 15  PSF_ALARM
//! 14  READ_PROTECT_TID
//! 13  READ_PROTECT_EPC
//! 12  READ_PROTECT_USER
//! 11  PRIVACY_MODE
//! 10  DIGITAL_OUTPUT
//! 9   MAX_BACKSCATTER_STRENGTH
//! 8   CONDITIONAL_READ_RANGE_REDUCTION_OPEN_SHORT
//! 7   CONDITIONAL_READ_RANGE_REDUCTION_ON_OFF
//! 6   DATA_MODE
//! 5   TAMPER_ALARM
//! 4   EXTERNAL_SUPPLY
//! 3   INVERT_DIGITAL_OUTPUT
//! 2   TRANSPARENT_MODE
//! ```
//!
//! Encoding ORs together the single-bit mask of every set flag; decoding
//! reads each flag back through its [`BitField`].

use mercury_core::{BitField, PackedRecord};
use serde::{Deserialize, Serialize};

const PSF_ALARM: BitField<u16> = BitField::new("PsfAlarm", 15, 1);
const READ_PROTECT_TID: BitField<u16> = BitField::new("ReadProtectTid", 14, 1);
const READ_PROTECT_EPC: BitField<u16> = BitField::new("ReadProtectEpc", 13, 1);
const READ_PROTECT_USER: BitField<u16> = BitField::new("ReadProtectUser", 12, 1);
const PRIVACY_MODE: BitField<u16> = BitField::new("PrivacyMode", 11, 1);
const DIGITAL_OUTPUT: BitField<u16> = BitField::new("DigitalOutput", 10, 1);
const MAX_BACKSCATTER_STRENGTH: BitField<u16> = BitField::new("MaxBackscatterStrength", 9, 1);
const CRRR_OPEN_SHORT: BitField<u16> = BitField::new("CrrrOpenShort", 8, 1);
const CRRR_ON_OFF: BitField<u16> = BitField::new("CrrrOnOff", 7, 1);
const DATA_MODE: BitField<u16> = BitField::new("DataMode", 6, 1);
const TAMPER_ALARM: BitField<u16> = BitField::new("TamperAlarm", 5, 1);
const EXTERNAL_SUPPLY: BitField<u16> = BitField::new("ExternalSupply", 4, 1);
const INVERT_DIGITAL_OUTPUT: BitField<u16> = BitField::new("InvertDigitalOutput", 3, 1);
const TRANSPARENT_MODE: BitField<u16> = BitField::new("TransparentMode", 2, 1);

/// G2iL/G2iM configuration word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ConfigWord {
    pub psf_alarm: bool,
    pub read_protect_tid: bool,
    pub read_protect_epc: bool,
    pub read_protect_user: bool,
    pub privacy_mode: bool,
    pub digital_output: bool,
    pub max_backscatter_strength: bool,
    pub conditional_read_range_reduction_open_short: bool,
    pub conditional_read_range_reduction_on_off: bool,
    pub data_mode: bool,
    pub tamper_alarm: bool,
    pub external_supply: bool,
    pub invert_digital_output: bool,
    pub transparent_mode: bool,
}

impl ConfigWord {
    /// The word as sent to the tag
    pub fn to_word(&self) -> u16 {
        [
            (self.psf_alarm, PSF_ALARM),
            (self.read_protect_tid, READ_PROTECT_TID),
            (self.read_protect_epc, READ_PROTECT_EPC),
            (self.read_protect_user, READ_PROTECT_USER),
            (self.privacy_mode, PRIVACY_MODE),
            (self.digital_output, DIGITAL_OUTPUT),
            (self.max_backscatter_strength, MAX_BACKSCATTER_STRENGTH),
            (self.conditional_read_range_reduction_open_short, CRRR_OPEN_SHORT),
            (self.conditional_read_range_reduction_on_off, CRRR_ON_OFF),
            (self.data_mode, DATA_MODE),
            (self.tamper_alarm, TAMPER_ALARM),
            (self.external_supply, EXTERNAL_SUPPLY),
            (self.invert_digital_output, INVERT_DIGITAL_OUTPUT),
            (self.transparent_mode, TRANSPARENT_MODE),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .fold(0, |word, (_, flag)| word | flag.mask())
    }

    /// Read the flags of a word; reserved bits are ignored
    pub fn from_word(word: u16) -> Self {
        Self {
            psf_alarm: PSF_ALARM.get_flag(word),
            read_protect_tid: READ_PROTECT_TID.get_flag(word),
            read_protect_epc: READ_PROTECT_EPC.get_flag(word),
            read_protect_user: READ_PROTECT_USER.get_flag(word),
            privacy_mode: PRIVACY_MODE.get_flag(word),
            digital_output: DIGITAL_OUTPUT.get_flag(word),
            max_backscatter_strength: MAX_BACKSCATTER_STRENGTH.get_flag(word),
            conditional_read_range_reduction_open_short: CRRR_OPEN_SHORT.get_flag(word),
            conditional_read_range_reduction_on_off: CRRR_ON_OFF.get_flag(word),
            data_mode: DATA_MODE.get_flag(word),
            tamper_alarm: TAMPER_ALARM.get_flag(word),
            external_supply: EXTERNAL_SUPPLY.get_flag(word),
            invert_digital_output: INVERT_DIGITAL_OUTPUT.get_flag(word),
            transparent_mode: TRANSPARENT_MODE.get_flag(word),
        }
    }
}

impl PackedRecord for ConfigWord {
    const NAME: &'static str = "ConfigWord";
    const LENGTH: usize = 2;
    type Store = u16;
    const RESERVED_MASK: u16 = 0b11;

    fn from_store(store: u16) -> Self {
        Self::from_word(store)
    }

    fn store(&self) -> u16 {
        self.to_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_reencodes_random;

    #[test]
    fn test_flags_or_together() {
        let word = ConfigWord {
            psf_alarm: true,
            privacy_mode: true,
            transparent_mode: true,
            ..Default::default()
        };
        assert_eq!(word.to_word(), 0x8804);
        assert_eq!(word.encode(), vec![0x88, 0x04]);
    }

    #[test]
    fn test_decode() {
        let word = ConfigWord::decode(&[0x40, 0x23]).unwrap();
        assert!(word.read_protect_tid);
        assert!(word.tamper_alarm);
        assert!(!word.psf_alarm);
        assert!(!word.transparent_mode);
        // reserved bits 1..0 are not carried
        assert_eq!(word.encode(), vec![0x40, 0x20]);
    }

    #[test]
    fn test_all_flags() {
        let word = ConfigWord::from_word(0xFFFF);
        assert_eq!(word.to_word(), 0xFFFC);
        assert_eq!(ConfigWord::default().to_word(), 0);
    }

    #[test]
    fn test_wrong_length() {
        assert!(ConfigWord::decode(&[0x00]).is_err());
    }

    #[test]
    fn test_random_reencode() {
        assert_reencodes_random::<ConfigWord>(0xC0F);
    }
}
