use std::sync::atomic::{AtomicBool, Ordering};

pub const API_BASE: &str = "https://api.magicthegathering.io";
pub const CARDS_PATH: &str = "/v1/cards";
pub const SETS_PATH: &str = "/v1/sets";
pub const BOOSTER_SEGMENT: &str = "booster";

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE: u32 = 1;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(true);

/// Whether the SDK emits its diagnostic lines. Defaults to `true`.
pub fn logging_enabled() -> bool {
    ENABLE_LOGGING.load(Ordering::Relaxed)
}

/// Turn the SDK's diagnostic lines on or off for the whole process.
///
/// Only gates `tracing` events; it never changes request or parsing behavior.
pub fn set_logging_enabled(enabled: bool) {
    ENABLE_LOGGING.store(enabled, Ordering::Relaxed);
}
