//! Snapshot capture and history.
//!
//! A snapshot is the set of stripped lines read from one dump file, tied to
//! its source path and a timestamp. Archived snapshots live as plain text
//! files named `ru_lang_<timestamp>.txt`; the newest one (by mtime) is the
//! comparison baseline for the next run. History is append-only: a run
//! always writes a fresh timestamped file and never touches old ones.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use walkdir::WalkDir;

pub const DUMP_PREFIX: &str = "ru_lang_";
pub const DUMP_SUFFIX: &str = ".txt";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// A point-in-time set of lines read from one dump file.
pub struct Snapshot {
    pub lines: HashSet<String>,
    pub source: PathBuf,
    pub timestamp: DateTime<Local>,
}

impl Snapshot {
    /// Strict load for the current dump: any read failure aborts the run.
    /// Timestamped with wall-clock time since this is a fresh capture.
    pub fn capture(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let bytes = fs::read(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

        Ok(Snapshot {
            lines: collect_lines(&String::from_utf8_lossy(&bytes)),
            source: path.to_path_buf(),
            timestamp: Local::now(),
        })
    }

    /// Lossy load for the previous dump: read failures degrade to an empty
    /// set plus a diagnostic, so the run proceeds as if no history exists.
    /// Timestamped with the file's mtime when available.
    pub fn load_or_empty(path: &Path) -> (Self, Vec<String>) {
        let mut diagnostics = Vec::new();

        let lines = match fs::read(path) {
            Ok(bytes) => collect_lines(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                diagnostics.push(format!("error reading {}: {e}", path.display()));
                HashSet::new()
            }
        };

        let timestamp = fs::metadata(path)
            .and_then(|m| m.modified())
            .map(DateTime::from)
            .unwrap_or_else(|_| Local::now());

        let snapshot = Snapshot {
            lines,
            source: path.to_path_buf(),
            timestamp,
        };
        (snapshot, diagnostics)
    }
}

/// File name for an archived dump with the given timestamp suffix.
pub fn dump_file_name(suffix: &str) -> String {
    format!("{DUMP_PREFIX}{suffix}{DUMP_SUFFIX}")
}

/// Most recently modified file in `dir` matching `prefix*suffix`, or None
/// when the directory is missing or nothing matches.
pub fn find_latest(dir: &Path, prefix: &str, suffix: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| matches_pattern(e.file_name(), prefix, suffix))
        .max_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()))
        .map(|e| e.into_path())
}

/// Metadata row for the `history` listing.
pub struct DumpRecord {
    pub path: PathBuf,
    pub modified: DateTime<Local>,
    pub lines: usize,
}

/// Archived dumps in `dir`, newest first. Unreadable entries are skipped.
pub fn list_dumps(dir: &Path) -> Vec<DumpRecord> {
    let mut records: Vec<DumpRecord> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| matches_pattern(e.file_name(), DUMP_PREFIX, DUMP_SUFFIX))
        .filter_map(|e| {
            let modified = e.metadata().ok()?.modified().ok()?;
            let bytes = fs::read(e.path()).ok()?;
            let lines = collect_lines(&String::from_utf8_lossy(&bytes)).len();

            Some(DumpRecord {
                path: e.into_path(),
                modified: modified.into(),
                lines,
            })
        })
        .collect();

    records.sort_by(|a, b| b.modified.cmp(&a.modified));
    records
}

fn matches_pattern(name: &OsStr, prefix: &str, suffix: &str) -> bool {
    name.to_str().is_some_and(|n| {
        n.len() >= prefix.len() + suffix.len() && n.starts_with(prefix) && n.ends_with(suffix)
    })
}

/// Strip every line and collapse duplicates. Blank lines strip to the
/// empty string and stay in the set, matching the source dumps' behavior
/// of carrying separator lines.
fn collect_lines(content: &str) -> HashSet<String> {
    content.lines().map(|l| l.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    #[test]
    fn collect_lines_strips_and_dedups() {
        let lines = collect_lines("a.x=1\n  a.x=1  \n\n b.y=2 \n");
        let expected: HashSet<String> = ["a.x=1", "", "b.y=2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn capture_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Snapshot::capture(&dir.path().join("ru.lang"));
        assert!(result.is_err());
    }

    #[test]
    fn load_or_empty_degrades_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (snapshot, diagnostics) = Snapshot::load_or_empty(&dir.path().join("gone.txt"));
        assert!(snapshot.lines.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn load_or_empty_reads_lines_and_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ru_lang_x.txt");
        fs::write(&path, "item.1=Sword\nui.title=Menu\n").unwrap();

        let (snapshot, diagnostics) = Snapshot::load_or_empty(&path);
        assert!(diagnostics.is_empty());
        assert_eq!(snapshot.lines.len(), 2);
        assert!(snapshot.lines.contains("item.1=Sword"));
    }

    #[test]
    fn find_latest_returns_none_for_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let latest = find_latest(&dir.path().join("nope"), DUMP_PREFIX, DUMP_SUFFIX);
        assert!(latest.is_none());
    }

    #[test]
    fn find_latest_ignores_non_matching_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "x\n").unwrap();
        fs::write(dir.path().join("ru_lang_a.log"), "x\n").unwrap();
        assert!(find_latest(dir.path(), DUMP_PREFIX, DUMP_SUFFIX).is_none());

        fs::write(dir.path().join("ru_lang_a.txt"), "x\n").unwrap();
        assert_eq!(
            find_latest(dir.path(), DUMP_PREFIX, DUMP_SUFFIX),
            Some(dir.path().join("ru_lang_a.txt"))
        );
    }

    #[test]
    fn find_latest_picks_newest_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let newer = dir.path().join("ru_lang_a.txt");
        let older = dir.path().join("ru_lang_b.txt");
        fs::write(&newer, "x\n").unwrap();
        fs::write(&older, "y\n").unwrap();

        let an_hour_ago = SystemTime::now() - Duration::from_secs(3600);
        fs::File::options()
            .write(true)
            .open(&older)
            .unwrap()
            .set_modified(an_hour_ago)
            .unwrap();

        assert_eq!(find_latest(dir.path(), DUMP_PREFIX, DUMP_SUFFIX), Some(newer));
    }

    #[test]
    fn list_dumps_sorts_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("ru_lang_first.txt");
        let second = dir.path().join("ru_lang_second.txt");
        fs::write(&first, "a.x=1\n").unwrap();
        fs::write(&second, "a.x=1\nb.y=2\n").unwrap();

        let an_hour_ago = SystemTime::now() - Duration::from_secs(3600);
        fs::File::options()
            .write(true)
            .open(&first)
            .unwrap()
            .set_modified(an_hour_ago)
            .unwrap();

        let records = list_dumps(dir.path());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].path, second);
        assert_eq!(records[0].lines, 2);
        assert_eq!(records[1].path, first);
        assert_eq!(records[1].lines, 1);
    }

    #[test]
    fn dump_file_name_round_trips_through_pattern() {
        let name = dump_file_name("2024-01-01_00-00-00");
        assert_eq!(name, "ru_lang_2024-01-01_00-00-00.txt");
        assert!(matches_pattern(OsStr::new(&name), DUMP_PREFIX, DUMP_SUFFIX));
    }
}
