// src/config/options.rs
use std::path::PathBuf;

/// What to keep and where to write it. Built once per run from the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub url: String,
    pub category: Option<String>,
    pub author: Option<String>,
    pub out_dir: PathBuf,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            url: s!(super::consts::BASE_URL),
            category: None,
            author: None,
            out_dir: PathBuf::from("."),
        }
    }
}

impl ScanOptions {
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_out_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.out_dir = dir.into();
        self
    }
}
