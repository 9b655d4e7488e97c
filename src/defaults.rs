//! Central place for the application's default values.

pub struct Defaults;

impl Defaults {
    /* Menu bar */
    pub const BAR_ROW: u16 = 0;
    pub const BAR_HEIGHT: u16 = 1;

    /* Event loop */
    pub const POLL_INTERVAL_MS: u64 = 250;
    pub const ACTION_LOG_LIMIT: usize = 200;

    /* Logging */
    pub const LOG_FILE: &'static str = "termenu.log";
    pub const LOG_ENV: &'static str = "TERMENU_LOG";
    pub const LOG_LEVEL: &'static str = "info";

    /* `dump` screen size */
    pub const DUMP_WIDTH: u16 = 80;
    pub const DUMP_HEIGHT: u16 = 24;
}
