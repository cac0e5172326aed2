#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Subscription endpoint served by the site backend.
pub const SUBSCRIBE_PATH: &str = "/api/subscribe/";

/// Hero slider advances automatically every 6 seconds.
pub const AUTOPLAY_INTERVAL_MS: u32 = 6_000;

/// Quiet period after the pointer leaves the top edge before the exit popup opens.
pub const EXIT_INTENT_DELAY_MS: u32 = 250;

/// Local-storage key recording that the exit popup was already shown.
pub const POPUP_SHOWN_KEY: &str = "popupShown";

/// Toast notifications hide themselves after 5 seconds.
pub const NOTICE_HIDE_MS: u32 = 5_000;
