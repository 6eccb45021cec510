use chrono_tz::Tz;

// Startup configuration
pub const STARTUP_CONFIG_FILE: &str = "startup.json";
// The window label the overlay UI is mounted into; declared in tauri.conf.json
pub const DEFAULT_HOST_ANCHOR: &str = "overlay";

// Log file, created in the app log dir at startup
pub const LOG_FILE_NAME: &str = "lola.log";

// =================================================
// Countdown
// =================================================
// 3 hours
pub const MAX_COUNTDOWN_SECONDS: u64 = 10_800;
pub const COUNTDOWN_END_ANNOUNCEMENT: &str = "countdown ended, Phantom";

// The overlay clock always shows Athens time, regardless of the host's zone
pub const OVERLAY_TIME_ZONE: Tz = chrono_tz::Europe::Athens;
pub const OVERLAY_TIME_FORMAT: &str = "%H:%M:%S";

// Used when neither the current nor the primary monitor can be queried
pub const FALLBACK_SCREEN_SIZE: (f64, f64) = (1920.0, 1080.0);

// Updater events emitted to the frontend
pub const EVENT_UPDATE_PROGRESS: &str = "update://download-progress";
pub const EVENT_UPDATE_READY: &str = "update://ready";
