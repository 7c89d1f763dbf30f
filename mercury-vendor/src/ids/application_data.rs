//! SL900A application data word, sent with the Initialize command
//!
//! ```text
//! 15..7  NUMBER_OF_WORDS      size of the application area in words
//! 6..3   RFU
//! 2..0   BROKEN_WORD_POINTER
//! ```

use crate::macros::packed_record;
use mercury_core::{BitField, MercuryResult};
use serde::{Deserialize, Serialize};

const NUMBER_OF_WORDS: BitField<u16> = BitField::new("NumberOfWords", 7, 9);
const BROKEN_WORD_POINTER: BitField<u16> = BitField::new("BrokenWordPointer", 0, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct ApplicationData {
    raw: u16,
}

packed_record!(ApplicationData, u16, 2, 0b0111_1000);

impl ApplicationData {
    pub fn new(number_of_words: u16, broken_word_pointer: u8) -> MercuryResult<Self> {
        let mut data = Self::default();
        data.set_number_of_words(number_of_words)?;
        data.set_broken_word_pointer(broken_word_pointer)?;
        Ok(data)
    }

    pub fn raw(&self) -> u16 {
        self.raw
    }

    pub fn number_of_words(&self) -> u16 {
        NUMBER_OF_WORDS.get(self.raw)
    }

    pub fn set_number_of_words(&mut self, value: u16) -> MercuryResult<()> {
        NUMBER_OF_WORDS.set(&mut self.raw, value)
    }

    pub fn broken_word_pointer(&self) -> u8 {
        BROKEN_WORD_POINTER.get(self.raw) as u8
    }

    pub fn set_broken_word_pointer(&mut self, value: u8) -> MercuryResult<()> {
        BROKEN_WORD_POINTER.set(&mut self.raw, value as u16)
    }
}
