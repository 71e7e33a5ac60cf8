//! UI Configuration

use log::LevelFilter;

pub const APP_TITLE: &str = "Todo Cards";

/// Console verbosity
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};
