// src/config/consts.rs

// Net config
// Placeholder for the dashboard's listing page; override with --url or DASHBOARD_SCRAPE_URL.
pub const DEFAULT_LISTING_URL: &str = "https://www.example.gov.in/Dashboard/";
pub const URL_ENV: &str = "DASHBOARD_SCRAPE_URL";
pub const USER_AGENT: &str = concat!("dashboard_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Scrape
/// List items inside panel bodies, anchor children.
pub const LISTING_LINK_SELECTOR: &str = ".panel-body li a";
pub const MAX_PROJECTS: usize = 5;
pub const FIELD_PLACEHOLDER: &str = "N/A";

// Logging
pub const LOG_ENV: &str = "DASHBOARD_SCRAPE_LOG";
