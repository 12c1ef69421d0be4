// src/filter.rs
use crate::data::DorkRecord;

/// Case-insensitive substring filters on category and author.
/// Both must pass when both are set; an unset filter passes everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DorkFilter {
    category: Option<String>,
    author: Option<String>,
}

impl DorkFilter {
    pub fn new(category: Option<&str>, author: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_lowercase),
            author: author.map(str::to_lowercase),
        }
    }

    pub fn matches(&self, rec: &DorkRecord) -> bool {
        contains_ci(&rec.category, self.category.as_deref())
            && contains_ci(&rec.author, self.author.as_deref())
    }

    /// Keep the matching records, in their original order.
    pub fn apply(&self, records: Vec<DorkRecord>) -> Vec<DorkRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

// `needle` is already lowercased.
fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) => haystack.to_lowercase().contains(n),
    }
}
