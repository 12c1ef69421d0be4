// src/error.rs
use std::{fmt, io, path::PathBuf};

/// Everything that can end a scan early.
/// Each kind is reported where it happens; none of them abort the process.
#[derive(Debug)]
pub enum ScanError {
    /// Non-200 status, or the request never completed.
    Network(String),
    /// The page came back but the dorks table was not in it.
    Parse(String),
    /// Writing (or reading back) the snapshot failed.
    Filesystem { path: PathBuf, source: io::Error },
    /// Ctrl-C from the user.
    Interrupted,
}

impl ScanError {
    pub fn network<S: Into<String>>(msg: S) -> Self {
        ScanError::Network(msg.into())
    }

    pub fn parse<S: Into<String>>(msg: S) -> Self {
        ScanError::Parse(msg.into())
    }

    pub fn filesystem<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ScanError::Filesystem { path: path.into(), source }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Network(msg) => write!(f, "{msg}"),
            ScanError::Parse(msg) => write!(f, "{msg}"),
            ScanError::Filesystem { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
            ScanError::Interrupted => write!(f, "Search interrupted by user"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Filesystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ScanError {
    fn from(e: reqwest::Error) -> Self {
        ScanError::Network(e.to_string())
    }
}
