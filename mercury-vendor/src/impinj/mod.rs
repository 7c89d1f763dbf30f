//! Impinj Monza 4 QT records

pub mod qt;

pub use qt::{QtControlByte, QtPayload};
