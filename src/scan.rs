// src/scan.rs
use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::{
    config::options::ScanOptions,
    core::net::{self, Transport},
    data::DorkRecord,
    error::ScanError,
    filter::DorkFilter,
    progress::Report,
    specs::ghdb,
    store,
};

/// Where a run is, or where it stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Init,
    Fetching,
    FetchFailed,
    Parsing,
    ParseFailed,
    FilteringAndReporting,
    Persisting,
    Done,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::FetchFailed | Stage::ParseFailed | Stage::Done)
    }
}

/// How a run ended.
#[derive(Debug)]
pub struct RunSummary {
    pub stage: Stage,
    pub records: usize,
    pub saved: Option<PathBuf>,
    pub error: Option<ScanError>,
}

/// One scan: owns the transport, the options, and the result set for this run.
pub struct Scanner<T: Transport> {
    transport: T,
    options: ScanOptions,
    filter: DorkFilter,
    results: Vec<DorkRecord>,
    stage: Stage,
}

impl<T: Transport> Scanner<T> {
    pub fn new(transport: T, options: ScanOptions) -> Self {
        let filter = DorkFilter::new(options.category.as_deref(), options.author.as_deref());
        Self {
            transport,
            options,
            filter,
            results: Vec::new(),
            stage: Stage::Init,
        }
    }

    pub fn results(&self) -> &[DorkRecord] {
        &self.results
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Fetch, parse, filter, and report. Matching records are appended to the
    /// result set and handed to `report` one at a time as they are accepted.
    pub fn fetch_dorks(&mut self, report: &mut dyn Report) -> Result<usize, ScanError> {
        report.begin(&self.options.url);

        self.stage = Stage::Fetching;
        let doc = net::fetch_page(&self.transport, &self.options.url).inspect_err(|_| {
            self.stage = Stage::FetchFailed;
        })?;

        self.stage = Stage::Parsing;
        let rows = ghdb::parse_doc(&doc).inspect_err(|_| {
            self.stage = Stage::ParseFailed;
        })?;
        info!(rows = rows.len(), "parsed table");

        self.stage = Stage::FilteringAndReporting;
        let before = self.results.len();
        for rec in rows {
            if !self.filter.matches(&rec) {
                continue;
            }
            report.found(&rec);
            self.results.push(rec);
        }
        Ok(self.results.len() - before)
    }

    /// Persist the result set. `Ok(None)` means it was empty and nothing was written.
    pub fn save_results(
        &mut self,
        now: &NaiveDateTime,
        report: &mut dyn Report,
    ) -> Result<Option<PathBuf>, ScanError> {
        self.stage = Stage::Persisting;
        let saved = store::save_snapshot(&self.options.out_dir, &self.results, now);
        self.stage = Stage::Done;

        match &saved {
            Ok(Some(path)) => report.saved(path),
            Ok(None) => report.nothing_to_save(),
            Err(_) => {}
        }
        saved
    }

    /// Drive the whole pipeline to a terminal stage.
    /// Failures are reported through `report` and returned in the summary, never raised.
    pub fn run(mut self, now: &NaiveDateTime, report: &mut dyn Report) -> RunSummary {
        if let Err(e) = self.fetch_dorks(report) {
            warn!(stage = ?self.stage, "scan stopped: {e}");
            report.failure(&e);
            return self.summary(None, Some(e));
        }

        match self.save_results(now, report) {
            Ok(saved) => self.summary(saved, None),
            Err(e) => {
                warn!("save failed: {e}");
                report.failure(&e);
                self.summary(None, Some(e))
            }
        }
    }

    fn summary(&self, saved: Option<PathBuf>, error: Option<ScanError>) -> RunSummary {
        RunSummary {
            stage: self.stage,
            records: self.results.len(),
            saved,
            error,
        }
    }
}
