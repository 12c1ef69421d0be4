// src/store.rs
// JSON snapshot on disk: google_dorks_<YYYYMMDD_HHMMSS>.json

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::config::consts::{FILE_EXT, FILE_PREFIX, JSON_INDENT, STAMP_FORMAT};
use crate::data::{DorkRecord, Snapshot};
use crate::error::ScanError;

pub fn timestamp(now: &NaiveDateTime) -> String {
    now.format(STAMP_FORMAT).to_string()
}

pub fn snapshot_filename(now: &NaiveDateTime) -> String {
    format!("{FILE_PREFIX}{}.{FILE_EXT}", timestamp(now))
}

/// Write `records` into `dir`, stamped with `now`.
///
/// Returns `Ok(None)` without touching the filesystem when there is nothing to save.
pub fn save_snapshot(
    dir: &Path,
    records: &[DorkRecord],
    now: &NaiveDateTime,
) -> Result<Option<PathBuf>, ScanError> {
    if records.is_empty() {
        return Ok(None);
    }

    let path = dir.join(snapshot_filename(now));
    let snapshot = Snapshot {
        timestamp: timestamp(now),
        total_dorks: records.len(),
        dorks: records.to_vec(),
    };

    write_json(&path, &snapshot).map_err(|e| ScanError::filesystem(&path, e))?;
    info!(count = records.len(), "saved {}", path.display());
    Ok(Some(path))
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::filesystem(path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ScanError::filesystem(path, e.into()))
}

/// Sibling path the snapshot is written to before being renamed into place.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

// Written to `<name>.tmp` then renamed, so an interrupted run never leaves a
// truncated snapshot under the final name.
// serde_json leaves non-ASCII as-is, so no escaping pass is needed.
fn write_json<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    let tmp = partial_path(path);
    let written = (|| {
        let mut out = BufWriter::new(File::create(&tmp)?);
        let mut ser =
            Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
        value.serialize(&mut ser)?;
        out.flush()?;
        out.get_ref().sync_all()
    })();

    match written.and_then(|()| fs::rename(&tmp, path)) {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    #[test]
    fn filename_embeds_second_granularity_stamp() {
        assert_eq!(snapshot_filename(&fixed_now()), "google_dorks_20240102_030405.json");
        assert_eq!(timestamp(&fixed_now()), "20240102_030405");
    }

    #[test]
    fn empty_set_writes_nothing() {
        let dir = std::env::temp_dir().join("ghdb_store_empty_unit");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let saved = save_snapshot(&dir, &[], &fixed_now()).unwrap();
        assert!(saved.is_none());
        assert!(!dir.join(snapshot_filename(&fixed_now())).exists());
    }

    #[test]
    fn save_leaves_only_the_final_file() {
        let dir = std::env::temp_dir().join("ghdb_store_atomic_unit");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let recs = vec![DorkRecord::new("d", "q", "c", "a")];
        let path = save_snapshot(&dir, &recs, &fixed_now()).unwrap().unwrap();

        assert!(path.exists());
        assert!(!partial_path(&path).exists());
        let names: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["google_dorks_20240102_030405.json"]);
    }

    #[test]
    fn partial_path_is_a_sibling() {
        let p = Path::new("out").join("google_dorks_20240102_030405.json");
        assert_eq!(
            partial_path(&p),
            Path::new("out").join("google_dorks_20240102_030405.json.tmp")
        );
    }

    #[test]
    fn missing_dir_is_filesystem_error() {
        let dir = std::env::temp_dir().join("ghdb_store_no_such_dir/deeper");
        let _ = std::fs::remove_dir_all(std::env::temp_dir().join("ghdb_store_no_such_dir"));
        let recs = vec![DorkRecord::new("d", "q", "c", "a")];
        let err = save_snapshot(&dir, &recs, &fixed_now()).unwrap_err();
        assert!(matches!(err, ScanError::Filesystem { .. }));
    }
}
