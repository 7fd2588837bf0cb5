//! Sentipool Storage Layer
//!
//! Implements the RecordStore trait over a single JSON document.
//!
//! # Architecture
//!
//! - One pretty-printed JSON array holds every SentenceRecord
//! - Reads fail soft: a missing or corrupt file degrades to an empty pool
//! - Writes replace the whole document via a temp file and rename, so a
//!   crashed write never leaves a half-written pool behind
//!
//! # Examples
//!
//! ```no_run
//! use sentipool_domain::traits::RecordStore;
//! use sentipool_store::JsonFileStore;
//!
//! let store = JsonFileStore::new("combined_data.json");
//! let records = store.load_all().unwrap();
//! ```

#![warn(missing_docs)]

use sentipool_domain::traits::RecordStore;
use sentipool_domain::SentenceRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during storage operations
///
/// Only writes surface errors; failed reads degrade to an empty pool.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// JSON-file-backed implementation of RecordStore
///
/// The store holds no state beyond the document path; every call re-reads
/// or rewrites the file, so all readers observe the last full write.
///
/// # Thread Safety
///
/// The store itself takes no lock. Callers that interleave votes from
/// multiple tasks must serialize the read-modify-write cycle themselves
/// (the server wraps the store in an RwLock).
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given document path
    ///
    /// The file need not exist yet; a missing document reads as an empty
    /// pool and is created by the first save.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The document path this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    type Error = StoreError;

    /// Read the full persisted set, failing soft
    ///
    /// A missing file, unreadable file, or undecodable document returns an
    /// empty set; the surrounding system treats that as "nothing to
    /// annotate" rather than crashing.
    fn load_all(&self) -> Result<Vec<SentenceRecord>, Self::Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("Failed to decode {}: {}", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    /// Atomically replace the persisted set
    ///
    /// Serializes a pretty-printed JSON array (serde_json leaves non-ASCII
    /// text unescaped, so the document round-trips at full fidelity),
    /// writes it to a sibling temp file, and renames over the target.
    /// Failures are returned to the caller, never swallowed.
    fn save_all(&mut self, records: &[SentenceRecord]) -> Result<(), Self::Error> {
        let json = serde_json::to_string_pretty(records)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
