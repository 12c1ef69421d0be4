// src/log.rs
// Debug log for development: `.store/debug.log`, appended per run.
// Release builds write no log file; the snapshot is the only output on disk.
// Console output belongs to `progress::Report`; nothing here touches stdout.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Install the file subscriber in debug builds only.
pub fn init() {
    if cfg!(debug_assertions) {
        init_in(Path::new(STORE_DIR));
    }
}

/// Log to `<dir>/debug.log`. Best-effort: if the file can't be opened
/// (or a subscriber is already set) logging stays off.
pub fn init_in(dir: &Path) {
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(dir.join(LOG_FILE)) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
