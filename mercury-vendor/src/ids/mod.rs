//! IDS SL900A sensor tag records
//!
//! The SL900A is a temperature logging tag. Its custom commands carry the
//! fixed-length records defined here.

pub mod calibration;
pub mod log_limits;
pub mod shelf_life;
pub mod application_data;
pub mod log_mode;
pub mod delay;
pub mod sensor;

pub use calibration::CalibrationData;
pub use log_limits::LogLimits;
pub use shelf_life::{ShelfLifeBlock0, ShelfLifeBlock1};
pub use application_data::ApplicationData;
pub use log_mode::{LogMode, LoggingForm, StorageRule};
pub use delay::{Delay, DelayMode};
pub use sensor::{BatteryLevelReading, BatteryType, SensorReading};
