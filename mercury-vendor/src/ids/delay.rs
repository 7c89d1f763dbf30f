//! SL900A delay word, sent with the Initialize command
//!
//! ```text
//! 15..4  DELAY_TIME  seconds before logging starts
//! 3..2   RFU
//! 1      DELAY_MODE
//! 0      IRQ_TIMER_ENABLE
//! ```

use crate::macros::packed_record;
use mercury_core::{BitField, MercuryResult};
use serde::{Deserialize, Serialize};

const DELAY_TIME: BitField<u16> = BitField::new("DelayTime", 4, 12);
const DELAY_MODE: BitField<u16> = BitField::new("DelayMode", 1, 1);
const IRQ_TIMER_ENABLE: BitField<u16> = BitField::new("IrqTimerEnable", 0, 1);

/// What starts the logging delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelayMode {
    Timer = 0,
    ExternalSwitch = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct Delay {
    raw: u16,
}

packed_record!(Delay, u16, 2, 0b1100);

impl Delay {
    pub fn new(delay_time: u16, mode: DelayMode, irq_timer_enable: bool) -> MercuryResult<Self> {
        let mut delay = Self::default();
        delay.set_delay_time(delay_time)?;
        delay.set_delay_mode(mode);
        delay.set_irq_timer_enable(irq_timer_enable);
        Ok(delay)
    }

    pub fn raw(&self) -> u16 {
        self.raw
    }

    pub fn delay_time(&self) -> u16 {
        DELAY_TIME.get(self.raw)
    }

    pub fn set_delay_time(&mut self, seconds: u16) -> MercuryResult<()> {
        DELAY_TIME.set(&mut self.raw, seconds)
    }

    pub fn delay_mode(&self) -> DelayMode {
        if DELAY_MODE.get_flag(self.raw) {
            DelayMode::ExternalSwitch
        } else {
            DelayMode::Timer
        }
    }

    pub fn set_delay_mode(&mut self, mode: DelayMode) {
        DELAY_MODE.set_flag(&mut self.raw, mode == DelayMode::ExternalSwitch);
    }

    pub fn irq_timer_enable(&self) -> bool {
        IRQ_TIMER_ENABLE.get_flag(self.raw)
    }

    pub fn set_irq_timer_enable(&mut self, on: bool) {
        IRQ_TIMER_ENABLE.set_flag(&mut self.raw, on);
    }
}
