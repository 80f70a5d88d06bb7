#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Orb Search - Desktop";
pub const APPLICATION_TITLE: &str = "Orb Search";
pub const CONFIG_DIRECTORY_NAME: &str = "orb-search-desktop";

pub const DEFAULT_SERVER_ADDRESS: &str = "https://api.orb.ax";
pub const LOCAL_SERVER_ADDRESS: &str = "http://127.0.0.1:8080";
pub const LINKS_ENDPOINT_PATH: &str = "/links";
pub const IMAGES_ENDPOINT_PATH: &str = "/images";
pub const ECHO_ENDPOINT_PATH: &str = "/echo";

pub const QUERY_FORM_FIELD: &str = "message";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub const LINK_MARKER_CLASS: &str = "generated-link";
pub const IMAGE_MARKER_CLASS: &str = "generated-image";
pub const IMAGE_MAX_WIDTH_PX: f32 = 200.0;
pub const IMAGE_MARGIN_PX: f32 = 5.0;

pub const ERROR_PREFIX: &str = "Error: ";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_SEARCH: &str = "[SEARCH]";
pub const LOG_TAG_HTTP: &str = "[HTTP]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_IMAGES: &str = "[IMAGES]";
pub const LOG_TAG_BROWSER: &str = "[BROWSER]";

pub const STATUS_READY: &str = "Type a query and press Enter";
pub const STATUS_SEARCHING: &str = "Searching...";

pub const SEARCH_PLACEHOLDER: &str = "Search the web...";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const MAIN_WINDOW_WIDTH: f32 = 900.0;
pub const MAIN_WINDOW_HEIGHT: f32 = 700.0;
