//! Read-through cache of parsed purchase tables.
//!
//! Entries are keyed by a SHA-256 fingerprint of the raw CSV bytes together
//! with every reader setting that affects parsing, so an edited file or a
//! changed column mapping is a miss.
//!
//! A one-shot CLI run loads once, so it never hits. The cache is held by
//! [`RunContext`](crate::context::RunContext) so a long-lived front end that
//! re-runs commands against the same file reuses the parsed table; `len`,
//! `is_empty` and `invalidate` are that front end's API and only tests call
//! them from the binary.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use anyhow::{Context, Result};
use kairos_io::{IoError, PurchaseRecord, ReaderConfig, read_csv_from};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Hex SHA-256 over the CSV bytes and the reader's cache key.
pub fn fingerprint(bytes: &[u8], config: &ReaderConfig) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.update([0u8]);
    hasher.update(config.cache_key().as_bytes());
    hex::encode(hasher.finalize())
}

/// Parsed datasets, owned by the front end for the duration of a run.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<String, Vec<PurchaseRecord>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached datasets.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached dataset.
    #[allow(dead_code)]
    pub fn invalidate(&mut self) {
        debug!(n_entries = self.entries.len(), "dataset cache invalidated");
        self.entries.clear();
    }

    /// Returns the records in `path`, parsing only on a fingerprint miss.
    pub fn load(&mut self, path: &Path, config: &ReaderConfig) -> Result<&[PurchaseRecord]> {
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read purchase file: {}", path.display()))?;
        let key = fingerprint(&bytes, config);

        let records = match self.entries.entry(key) {
            Entry::Occupied(e) => {
                debug!(path = %path.display(), "dataset cache hit");
                e.into_mut()
            }
            Entry::Vacant(e) => {
                debug!(path = %path.display(), n_bytes = bytes.len(), "dataset cache miss");
                let parsed = read_csv_from(bytes.as_slice(), config)
                    .with_context(|| format!("failed to parse purchase CSV: {}", path.display()))?;
                e.insert(parsed)
            }
        };
        Ok(records.as_slice())
    }
}
