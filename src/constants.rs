/// Element ids, selectors and inline style values used by the web frontend.
///
/// Kept free of `web-sys` so host tests can `include!` this file.
// Page structure
pub const CONTAINER_SELECTOR: &str = ".carousel-container";
pub const CAROUSEL_ID: &str = "carousel";
pub const PAGINATION_ID: &str = "pagination";
pub const TITLE_ID: &str = "item-title";
pub const YEAR_ID: &str = "item-year";
pub const INFO_PANEL_SELECTOR: &str = ".info-panel";

// External configuration
pub const ITEMS_SRC_ATTR: &str = "data-items-src"; // on the container; URL of a JSON item list
pub const ITEMS_SCRIPT_ID: &str = "carousel-items"; // inline <script type="application/json">
pub const CONFIG_SCRIPT_ID: &str = "carousel-config";

// Classes
pub const CARD_CLASS: &str = "card";
pub const DOT_CLASS: &str = "dot";
pub const PLACEHOLDER_CLASS: &str = "card-placeholder";
pub const PLACEHOLDER_TEXT_CLASS: &str = "card-placeholder-text";
pub const ACTIVE_CLASS: &str = "active";

// Card display while visible
pub const CARD_DISPLAY: &str = "flex";

// Active / inactive card boundary
pub const ACTIVE_BORDER: &str = "var(--secondary)";
pub const ACTIVE_SHADOW: &str = "0 20px 50px rgba(108, 92, 231, 0.4)";
pub const INACTIVE_BORDER: &str = "rgba(255,255,255,0.1)";
pub const INACTIVE_SHADOW: &str = "0 10px 30px rgba(0, 0, 0, 0.5)";

// Cursor feedback on the container
pub const CURSOR_GRAB: &str = "grab";
pub const CURSOR_GRABBING: &str = "grabbing";

// Caption fade, re-triggered whenever the caption text changes
pub const CAPTION_FADE: &str = "fadeIn 0.5s forwards";
