// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod filter;
pub mod log;
pub mod progress;
pub mod scan;
pub mod specs;
pub mod store;

pub use data::{DorkRecord, Snapshot};
pub use error::ScanError;
pub use scan::{RunSummary, Scanner, Stage};
