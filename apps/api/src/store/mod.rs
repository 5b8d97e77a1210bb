//! Resume persistence: an in-memory index mirrored to one JSON file per
//! resume under the data directory.

pub mod id;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::resume::Resume;
use crate::store::id::resume_id;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resume {0} not found")]
    NotFound(String),

    #[error("I/O error for {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to serialize resume {id}: {source}")]
    Serialize {
        id: String,
        source: serde_json::Error,
    },
}

/// Stores resumes in an in-memory index mirrored to `<data_dir>/<id>.json`
/// files, pretty-printed.
///
/// The index is the single source of truth for existence: reads never fall
/// back to disk (the mirror is scanned exactly once, in [`ResumeStore::open`]).
/// Each operation is atomic with respect to the index, but the index update
/// and the file write inside `put` are not atomic with each other. A failed
/// file write leaves the index entry in place, and a `delete` racing a `put`
/// on the same id can strand a file without an index entry or vice versa.
pub struct ResumeStore {
    data_dir: PathBuf,
    index: RwLock<HashMap<String, Resume>>,
}

impl ResumeStore {
    /// Creates a store with an empty index. No disk access.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            index: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store and rebuilds the index from any `*.json` files already
    /// under `data_dir`. Files that cannot be read or parsed are skipped with
    /// a warning; a missing directory starts the store empty.
    pub fn open(data_dir: PathBuf) -> Self {
        let store = Self::new(data_dir);
        store.load_existing();
        store
    }

    fn load_existing(&self) {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return,
            Err(e) => {
                warn!("Cannot scan {}: {e}", self.data_dir.display());
                return;
            }
        };

        let mut index = self.index.write().expect("resume index poisoned");
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let parsed = fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| {
                    serde_json::from_str::<Resume>(&json).map_err(|e| e.to_string())
                });
            match parsed {
                Ok(resume) => {
                    index.insert(stem.to_string(), resume);
                }
                Err(reason) => warn!("Skipping {}: {reason}", path.display()),
            }
        }
        if !index.is_empty() {
            info!(
                "Indexed {} resume(s) from {}",
                index.len(),
                self.data_dir.display()
            );
        }
    }

    /// Saves a resume under a freshly minted identifier, returning the
    /// identifier and the stamped `lastModified` timestamp.
    ///
    /// The identifier and `lastModified` come from the same clock reading, so
    /// the two never straddle a second boundary. The index is updated first;
    /// if the file write then fails, the error is surfaced but the index
    /// entry is NOT rolled back, so the caller sees an error while `get` on
    /// the returned id would succeed. Identifier collisions (same name, same
    /// second) silently overwrite the earlier record.
    pub fn put(&self, resume: Resume) -> Result<(String, String), StoreError> {
        self.put_at(resume, Utc::now())
    }

    fn put_at(&self, mut resume: Resume, now: DateTime<Utc>) -> Result<(String, String), StoreError> {
        let id = resume_id(&resume.personal_info.name, now);
        let timestamp = now.to_rfc3339();
        resume.last_modified = timestamp.clone();

        {
            let mut index = self.index.write().expect("resume index poisoned");
            index.insert(id.clone(), resume.clone());
        }

        // File write happens outside the lock, after the index insert.
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::Io {
            path: self.data_dir.clone(),
            source: e,
        })?;
        let json = serde_json::to_string_pretty(&resume).map_err(|e| StoreError::Serialize {
            id: id.clone(),
            source: e,
        })?;
        let path = self.file_path(&id);
        fs::write(&path, json).map_err(|e| StoreError::Io { path, source: e })?;

        info!("Saved resume {id}");
        Ok((id, timestamp))
    }

    /// Returns all known identifiers, in no particular order.
    pub fn list(&self) -> Vec<String> {
        let index = self.index.read().expect("resume index poisoned");
        index.keys().cloned().collect()
    }

    /// Fetches a resume by identifier. An index miss is `NotFound`; the
    /// file mirror is never consulted here.
    pub fn get(&self, id: &str) -> Result<Resume, StoreError> {
        let index = self.index.read().expect("resume index poisoned");
        index
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Deletes a resume: removes the index entry, then the file. A file
    /// already missing from disk is not an error.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        {
            let mut index = self.index.write().expect("resume index poisoned");
            if index.remove(id).is_none() {
                return Err(StoreError::NotFound(id.to_string()));
            }
        }

        let path = self.file_path(id);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::Io { path, source: e }),
        }

        info!("Deleted resume {id}");
        Ok(())
    }

    /// Number of resumes currently indexed.
    pub fn count(&self) -> usize {
        let index = self.index.read().expect("resume index poisoned");
        index.len()
    }

    fn file_path(&self, id: &str) -> PathBuf {
        self.data_dir.join(format!("{id}.json"))
    }
}
