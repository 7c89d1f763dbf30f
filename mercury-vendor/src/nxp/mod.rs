//! NXP G2iL/G2iM records

pub mod config_word;

pub use config_word::ConfigWord;
