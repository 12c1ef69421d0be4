// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.exploit-db.com/google-hacking-database";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Page layout
pub const TABLE_ID: &str = "exploits-table";
pub const MIN_CELLS: usize = 4;

// Local debug log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const FILE_PREFIX: &str = "google_dorks_";
pub const FILE_EXT: &str = "json";
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const JSON_INDENT: &[u8] = b"    ";
