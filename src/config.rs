use log::Level;

/// Anchor ids the navigation and the hero button scroll to.
pub const JOURNEY_ANCHOR: &str = "journey";
pub const GALLERY_ANCHOR: &str = "gallery";
pub const QUOTES_ANCHOR: &str = "quotes";

/// Tiles start loading once they are this many pixels from the viewport.
pub const DEFAULT_LAZY_MARGIN_PX: i32 = 100;

/// Delay between consecutive items of a staggered entrance, in milliseconds.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Scroll offset after which the navigation bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn get_asset_base_url() -> &'static str {
    "/assets"  // trunk serve copies assets/ next to index.html
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base_url() -> &'static str {
    "/love-story/assets"  // Deployed under a sub path
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", get_asset_base_url(), file.trim_start_matches('/'))
}
