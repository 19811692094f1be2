use log::Level;

/// Used when the window does not report `innerHeight`.
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 800.0;
/// Used when the window does not report `innerWidth`. Resolves to the desktop intensity.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

/// Widths up to and including this value use the compact intensity.
pub const COMPACT_BREAKPOINT: f64 = 768.0;
pub const COMPACT_INTENSITY: f64 = 10.0;
pub const WIDE_INTENSITY: f64 = 18.0;

/// Extra downward displacement of the hero visual before the entrance transition.
pub const ENTRANCE_OFFSET: f64 = 10.0;

pub const ACK_DISMISS_MS: u32 = 6_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
