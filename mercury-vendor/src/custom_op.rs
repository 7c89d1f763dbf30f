//! Vendor custom tag operations
//!
//! A [`CustomTagOp`] pairs a chip type with the record it carries. The chip
//! type is derived from the payload, so an operation built here can never
//! address a record to the wrong silicon.

use crate::ids::{ApplicationData, CalibrationData, Delay, LogLimits, LogMode, ShelfLifeBlock0, ShelfLifeBlock1};
use crate::impinj::{QtControlByte, QtPayload};
use crate::nxp::ConfigWord;
use mercury_core::{MercuryError, MercuryResult, PackedRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag silicon that accepts custom commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChipType {
    NxpG2il = 0x07,
    ImpinjMonza4 = 0x08,
    IdsSl900a = 0x0A,
}

impl ChipType {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Get chip type from its silicon code
    pub fn from_code(code: u8) -> MercuryResult<Self> {
        match code {
            0x07 => Ok(ChipType::NxpG2il),
            0x08 => Ok(ChipType::ImpinjMonza4),
            0x0A => Ok(ChipType::IdsSl900a),
            _ => Err(MercuryError::InvalidData(format!(
                "Unknown chip type: 0x{:02X}",
                code
            ))),
        }
    }
}

impl fmt::Display for ChipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChipType::NxpG2il => "NXP G2iL",
            ChipType::ImpinjMonza4 => "Impinj Monza 4",
            ChipType::IdsSl900a => "IDS SL900A",
        };
        f.write_str(name)
    }
}

/// Record carried by a custom operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VendorPayload {
    Calibration(CalibrationData),
    LogLimits(LogLimits),
    ShelfLife {
        block0: ShelfLifeBlock0,
        block1: ShelfLifeBlock1,
    },
    Initialize {
        delay: Delay,
        app_data: ApplicationData,
    },
    LogMode(LogMode),
    ConfigWord(ConfigWord),
    Qt {
        control: QtControlByte,
        payload: QtPayload,
    },
}

impl VendorPayload {
    pub fn chip_type(&self) -> ChipType {
        match self {
            VendorPayload::Calibration(_)
            | VendorPayload::LogLimits(_)
            | VendorPayload::ShelfLife { .. }
            | VendorPayload::Initialize { .. }
            | VendorPayload::LogMode(_) => ChipType::IdsSl900a,
            VendorPayload::ConfigWord(_) => ChipType::NxpG2il,
            VendorPayload::Qt { .. } => ChipType::ImpinjMonza4,
        }
    }

    /// Encode the record bytes in command order
    pub fn encode(&self) -> Vec<u8> {
        match self {
            VendorPayload::Calibration(cal) => cal.encode(),
            VendorPayload::LogLimits(limits) => limits.encode(),
            VendorPayload::ShelfLife { block0, block1 } => {
                let mut out = block0.encode();
                out.extend(block1.encode());
                out
            }
            VendorPayload::Initialize { delay, app_data } => {
                let mut out = delay.encode();
                out.extend(app_data.encode());
                out
            }
            VendorPayload::LogMode(mode) => mode.encode(),
            VendorPayload::ConfigWord(word) => word.encode(),
            VendorPayload::Qt { control, payload } => {
                let mut out = control.encode();
                out.extend(payload.encode());
                out
            }
        }
    }
}

/// A custom command addressed to one chip type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VendorPayload", into = "VendorPayload")]
pub struct CustomTagOp {
    chip_type: ChipType,
    payload: VendorPayload,
}

impl CustomTagOp {
    pub fn chip_type(&self) -> ChipType {
        self.chip_type
    }

    pub fn payload(&self) -> &VendorPayload {
        &self.payload
    }

    pub fn payload_bytes(&self) -> Vec<u8> {
        self.payload.encode()
    }
}

impl From<VendorPayload> for CustomTagOp {
    fn from(payload: VendorPayload) -> Self {
        let chip_type = payload.chip_type();
        log::trace!("Custom operation for {}", chip_type);
        Self { chip_type, payload }
    }
}

impl From<CustomTagOp> for VendorPayload {
    fn from(op: CustomTagOp) -> Self {
        op.payload
    }
}

/// SL900A Set Calibration Data
pub fn set_calibration_data(cal: CalibrationData) -> CustomTagOp {
    VendorPayload::Calibration(cal).into()
}

/// SL900A Set Log Limits
pub fn set_log_limits(limits: LogLimits) -> CustomTagOp {
    VendorPayload::LogLimits(limits).into()
}

/// SL900A Set Shelf Life
pub fn set_shelf_life(block0: ShelfLifeBlock0, block1: ShelfLifeBlock1) -> CustomTagOp {
    VendorPayload::ShelfLife { block0, block1 }.into()
}

/// SL900A Initialize
pub fn initialize(delay: Delay, app_data: ApplicationData) -> CustomTagOp {
    VendorPayload::Initialize { delay, app_data }.into()
}

/// SL900A Set Log Mode
pub fn set_log_mode(mode: LogMode) -> CustomTagOp {
    VendorPayload::LogMode(mode).into()
}

/// G2iL ChangeConfig
pub fn change_config(word: ConfigWord) -> CustomTagOp {
    VendorPayload::ConfigWord(word).into()
}

/// Monza 4 QT read or write
pub fn qt_read_write(control: QtControlByte, payload: QtPayload) -> CustomTagOp {
    VendorPayload::Qt { control, payload }.into()
}
