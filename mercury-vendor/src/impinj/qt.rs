//! Monza 4 QT command fields
//!
//! # Payload
//! ```text
//! 15     QTSR   reduce range (short range mode)
//! 14     QTMEM  expose the public memory map
//! 13..0  RFU
//! ```
//!
//! # Control byte
//! ```text
//! 7     READ_WRITE  0 = read, 1 = write
//! 6     PERSISTENCE 0 = temporary, 1 = permanent
//! 5..0  RFU
//! ```

use mercury_core::{BitField, PackedRecord};
use serde::{Deserialize, Serialize};

const QTSR: BitField<u16> = BitField::new("Qtsr", 15, 1);
const QTMEM: BitField<u16> = BitField::new("Qtmem", 14, 1);

const READ_WRITE: BitField<u8> = BitField::new("ReadWrite", 7, 1);
const PERSISTENCE: BitField<u8> = BitField::new("Persistence", 6, 1);

/// QT payload word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QtPayload {
    /// Tag uses the reduced-range profile
    pub qtsr: bool,
    /// Tag exposes its public memory map
    pub qtmem: bool,
}

impl PackedRecord for QtPayload {
    const NAME: &'static str = "QtPayload";
    const LENGTH: usize = 2;
    type Store = u16;
    const RESERVED_MASK: u16 = 0x3FFF;

    fn from_store(store: u16) -> Self {
        Self {
            qtsr: QTSR.get_flag(store),
            qtmem: QTMEM.get_flag(store),
        }
    }

    fn store(&self) -> u16 {
        let mut word = 0;
        QTSR.set_flag(&mut word, self.qtsr);
        QTMEM.set_flag(&mut word, self.qtmem);
        word
    }
}

/// QT control byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QtControlByte {
    /// Write the payload; otherwise read it back
    pub write: bool,
    /// Survive power loss; otherwise revert at next power up
    pub persistent: bool,
}

impl QtControlByte {
    pub fn read() -> Self {
        Self::default()
    }

    pub fn write(persistent: bool) -> Self {
        Self {
            write: true,
            persistent,
        }
    }
}

impl PackedRecord for QtControlByte {
    const NAME: &'static str = "QtControlByte";
    const LENGTH: usize = 1;
    type Store = u8;
    const RESERVED_MASK: u8 = 0x3F;

    fn from_store(store: u8) -> Self {
        Self {
            write: READ_WRITE.get_flag(store),
            persistent: PERSISTENCE.get_flag(store),
        }
    }

    fn store(&self) -> u8 {
        let mut byte = 0;
        READ_WRITE.set_flag(&mut byte, self.write);
        PERSISTENCE.set_flag(&mut byte, self.persistent);
        byte
    }
}
