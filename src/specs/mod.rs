// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec knows *where the data
//! lives in the HTML* of one page and how to pull it out into typed records.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an already-fetched document.
//! - **Selector choice** (table id, row/cell positions).
//!
//! ## What does **not** live here
//! - Fetching, filtering, printing, or persistence. Those are driven by
//!   `scan::Scanner`.
//!
//! ## Typical call chain
//! ```text
//! cli::run → Scanner::run → core::net::fetch_page
//!                         → specs::ghdb::parse_doc
//!                         → filter / progress / store
//! ```
//!
//! ## Testing notes
//! - Specs are tested offline against inline HTML fixtures.
pub mod ghdb;
