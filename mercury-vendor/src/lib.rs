//! Vendor records for the Mercury RFID tag codec
//!
//! Concrete packed records for chips with custom commands, and the
//! [`CustomTagOp`] that carries them.

mod macros;
#[cfg(test)]
mod testing;

pub mod ids;
pub mod nxp;
pub mod impinj;
pub mod custom_op;

pub use custom_op::{
    change_config, initialize, qt_read_write, set_calibration_data, set_log_limits, set_log_mode,
    set_shelf_life, ChipType, CustomTagOp, VendorPayload,
};
pub use impinj::{QtControlByte, QtPayload};
pub use nxp::ConfigWord;
