// src/progress.rs
use std::path::Path;

use colored::Colorize;

use crate::data::DorkRecord;
use crate::error::ScanError;

/// Reporting hooks for a scan. Frontends implement what they care about.
pub trait Report {
    /// Called once, before the request goes out.
    fn begin(&mut self, _url: &str) {}

    /// Called for each record as soon as it passes the filter.
    fn found(&mut self, _rec: &DorkRecord) {}

    /// The snapshot was written.
    fn saved(&mut self, _path: &Path) {}

    /// The result set was empty; nothing was written.
    fn nothing_to_save(&mut self) {}

    /// A stage failed and the run is ending.
    fn failure(&mut self, _err: &ScanError) {}
}

/// A no-op reporter.
pub struct NullReport;
impl Report for NullReport {}

/// Coloured stdout output.
pub struct ConsoleReport;

impl Report for ConsoleReport {
    fn begin(&mut self, _url: &str) {
        println!("{}", "[*] Fetching Google Dorks from Exploit-DB...".cyan());
    }

    fn found(&mut self, rec: &DorkRecord) {
        println!("\n{}", "[+] Found Dork:".green());
        println!("{} {}", "Date:".yellow(), rec.date);
        println!("{} {}", "Dork:".yellow(), rec.dork);
        println!("{} {}", "Category:".yellow(), rec.category);
        println!("{} {}", "Author:".yellow(), rec.author);
        println!("{}", "-".repeat(80));
    }

    fn saved(&mut self, path: &Path) {
        println!("\n{}", saved_line(path).green());
    }

    fn nothing_to_save(&mut self) {
        println!("\n{}", "[!] No results to save".red());
    }

    fn failure(&mut self, err: &ScanError) {
        println!("\n{}", failure_line(err).red());
    }
}

/// Snapshots written to the working directory are shown by bare filename.
pub fn saved_line(path: &Path) -> String {
    let shown = path.strip_prefix(".").unwrap_or(path);
    format!("[+] Results saved to: {}", shown.display())
}

pub fn failure_line(err: &ScanError) -> String {
    match err {
        ScanError::Interrupted => format!("[!] {err}"),
        ScanError::Filesystem { .. } => format!("[!] Error saving results: {err}"),
        _ => format!("[!] Error: {err}"),
    }
}
