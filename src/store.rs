//! Report store backed by a local JSON file.
//!
//! The persistence analog of the web variant's browser storage: one
//! JSON array of report records, rewritten on every append. The store
//! is deliberately untrusting of its own file — whatever is on disk
//! goes through the Normalizer on load, so hand-edited or partially
//! corrupt collections degrade to their valid subset instead of
//! poisoning aggregation.
//!
//! Durability is this module's whole job; the engine never sees it.
//! A remote document database could replace this behind the same
//! surface: supply a snapshot, accept appends.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::dev_mode;
use crate::logging;
use crate::model::Report;
use crate::normalize::normalize_reports;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise reading or writing the store file.
#[derive(Debug)]
pub enum StoreError {
    /// The file exists but could not be read or written.
    Io(io::Error),
    /// The file content is not valid JSON.
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {}", e),
            StoreError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// In-memory report collection with optional file persistence.
pub struct ReportStore {
    reports: Vec<Report>,
    path: Option<PathBuf>,
}

impl ReportStore {
    /// A store with no backing file. Appends stay in memory.
    pub fn in_memory() -> Self {
        ReportStore {
            reports: Vec::new(),
            path: None,
        }
    }

    /// A memory-only store pre-filled with the given reports.
    pub fn with_reports(reports: Vec<Report>) -> Self {
        ReportStore {
            reports,
            path: None,
        }
    }

    /// Opens a file-backed store. A missing file is the normal
    /// first-run state and yields an empty store; unreadable or
    /// non-JSON content is an error. Whatever parses is normalized,
    /// so invalid records in the file are silently dropped.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(ReportStore {
                    reports: Vec::new(),
                    path: Some(path),
                });
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let value: Value =
            serde_json::from_str(&text).map_err(|e| StoreError::Parse(e.to_string()))?;
        let reports = normalize_reports(&value);

        Ok(ReportStore {
            reports,
            path: Some(path),
        })
    }

    /// Opens a file-backed store, seeding sample data when there is
    /// nothing usable: a first run with no file yet, or a file that
    /// fails to load. A present file that parses — even to an empty
    /// collection — is used as-is. Load failures are logged; the bad
    /// file is overwritten on the next successful append.
    pub fn load_or_seed(path: impl Into<PathBuf>, now_ms: i64) -> Self {
        let path = path.into();
        if !path.exists() {
            return ReportStore {
                reports: dev_mode::sample_reports(now_ms),
                path: Some(path),
            };
        }
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                logging::log_store_failure(&path.display().to_string(), "load", &e);
                ReportStore {
                    reports: dev_mode::sample_reports(now_ms),
                    path: Some(path),
                }
            }
        }
    }

    /// The current snapshot, oldest first in append order. Aggregation
    /// functions take this slice.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Appends a batch of freshly constructed reports and persists.
    /// Reports are immutable once stored; there is no update or delete.
    pub fn append(&mut self, batch: Vec<Report>) -> Result<(), StoreError> {
        self.reports.extend(batch);
        self.save()
    }

    /// Writes the full collection to the backing file, if any.
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let text =
            serde_json::to_string(&self.reports).map_err(|e| StoreError::Parse(e.to_string()))?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Builds the report batch for one form submission: one report per
/// category the user actually answered, all sharing the submission
/// timestamp. Level 0 means "not selected" and is skipped, as is
/// anything outside 1–3.
pub fn submission_batch(beach_id: i64, entries: &[(&str, u8)], ts_ms: i64) -> Vec<Report> {
    entries
        .iter()
        .filter(|(category, level)| !category.is_empty() && (1..=3).contains(level))
        .map(|&(category, level)| Report::new(beach_id, category, level, ts_ms))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
