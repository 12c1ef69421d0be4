// src/core/html.rs
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

use crate::error::ScanError;

/// Compile a CSS selector, turning a bad pattern into a `Parse` error.
pub fn selector(css: &str) -> Result<Selector, ScanError> {
    Selector::parse(css).map_err(|e| ScanError::parse(format!("bad selector {css:?}: {e:?}")))
}

/// All descendant text of an element, concatenated and trimmed.
/// Inner whitespace is kept as-is.
pub fn cell_text(el: ElementRef<'_>) -> String {
    let mut out = s!();
    for t in el.text() {
        out.push_str(t);
    }
    s!(out.trim())
}
