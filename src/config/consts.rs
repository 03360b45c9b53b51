// src/config/consts.rs

// Page markers (classes/ids on a Redfin home detail page)
pub const STREET_ADDRESS_CLASS: &str = "street-address";
pub const SUBTEXT_CLASS: &str = "dp-subtext";
pub const MAIN_STATS_CLASS: &str = "home-main-stats-variant";
pub const KEY_DETAILS_CLASS: &str = "keyDetailsList";
pub const PROPERTY_DETAILS_ID: &str = "property-details-scroll";

// Bot wall: tools stay detached if the body text contains this
pub const ROBOT_PHRASE: &str = "you might be a robot";

// Listing pages look like https://www.redfin.com/<state>/<city>/<slug>/home/<id>
pub const LISTING_HOST: &str = "www.redfin.com";
pub const LISTING_PATH_MARKER: &str = "/home/";

// Additional-details line split
pub const DETAIL_SEP: &str = ": ";

// Placeholder for fields the page doesn't expose
pub const UNKNOWN_FIELD: &str = "Unknown";
pub const UNKNOWN_VALUE: &str = "?";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("redfin_tools/", env!("CARGO_PKG_VERSION"));
pub const MAX_RETRIES: u32 = 3;
pub const RETRY_BASE_DELAY_MS: u64 = 500;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "redfin_tools=info";

// GUI
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 600.0;
pub const PANEL_WIDTH: f32 = 140.0;
