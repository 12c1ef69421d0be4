// src/data.rs
use serde::{Deserialize, Serialize};

/// One row of the GHDB table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DorkRecord {
    pub date: String,
    pub dork: String,
    pub category: String,
    pub author: String,
}

impl DorkRecord {
    pub fn new<S: Into<String>>(date: S, dork: S, category: S, author: S) -> Self {
        Self {
            date: date.into(),
            dork: dork.into(),
            category: category.into(),
            author: author.into(),
        }
    }
}

/// What lands on disk: a stamp, a count, and the records in scan order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: String,
    pub total_dorks: usize,
    pub dorks: Vec<DorkRecord>,
}
