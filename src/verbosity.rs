// Output detail for the snapshot client
//
// 0: banner, result and error lines only
// 1: + where the config and API token came from
// 2: + request/response trace with timestamps
use std::sync::atomic::{AtomicU8, Ordering};

pub const QUIET: u8 = 0;
pub const CONFIG_SOURCES: u8 = 1;
pub const REQUEST_TRACE: u8 = 2;

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(QUIET);

/// `-v` counts beyond the request trace level are clamped.
pub fn set_verbosity_level(level: u8) {
    VERBOSITY_LEVEL.store(level.min(REQUEST_TRACE), Ordering::Relaxed);
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

pub fn shows(level: u8) -> bool {
    get_verbosity_level() >= level
}

// Always printed: the banner and the fetched result
#[macro_export]
macro_rules! v_summary {
    ($($arg:tt)*) => {{
        println!($($arg)*);
    }};
}

// Config file and token source
#[macro_export]
macro_rules! v_info {
    ($($arg:tt)*) => {{
        if $crate::verbosity::shows($crate::verbosity::CONFIG_SOURCES) {
            println!($($arg)*);
        }
    }};
}

// Request URL, status and raw body
#[macro_export]
macro_rules! v_debug {
    ($($arg:tt)*) => {{
        if $crate::verbosity::shows($crate::verbosity::REQUEST_TRACE) {
            println!($($arg)*);
        }
    }};
}

// Request failures go to stdout next to results, at every level
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => {{
        println!($($arg)*);
    }};
}
