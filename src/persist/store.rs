use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dom::dom_model::Document;
use crate::persist::error::PersistError;

/// Prefix for every storage key written by this library.
pub const STORAGE_PREFIX: &str = "form-persistence#";

/// The injected storage capability: a string-keyed, string-valued store with
/// the lifetime of the surrounding page or session.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Which of the host's stores a form persists into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageScope {
    #[default]
    Durable,
    Session,
}

/// The host's two stores side by side, one per scope. Options pick which one
/// a form persists into.
#[derive(Debug, Default)]
pub struct ScopedStores<D: StorageBackend, S: StorageBackend> {
    pub durable: D,
    pub session: S,
}

impl<D: StorageBackend, S: StorageBackend> ScopedStores<D, S> {
    pub fn select(&mut self, scope: StorageScope) -> &mut dyn StorageBackend {
        match scope {
            StorageScope::Durable => &mut self.durable,
            StorageScope::Session => &mut self.session,
        }
    }
}

/// Derive the storage key for a form: the explicit identifier when given,
/// otherwise the form's element id. Neither present is a configuration
/// error, raised before any storage access.
pub fn storage_key(
    doc: &Document,
    form: usize,
    identifier: Option<&str>,
) -> Result<String, PersistError> {
    let ident = identifier
        .or_else(|| doc.forms.get(form).and_then(|f| f.element_id.as_deref()))
        .ok_or(PersistError::MissingIdentity)?;
    Ok(format!("{STORAGE_PREFIX}{ident}"))
}

// ============================================================================
// Backends
// ============================================================================

/// In-memory store. Stands in for session-scoped storage and doubles as the
/// test backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Durable store backed by a single JSON object file. Missing or malformed
/// files read as empty; writes go through on every mutation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => HashMap::new(),
        };
        FileStorage { path, entries }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize store: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            eprintln!(
                "Warning: failed to write store '{}': {}",
                self.path.display(),
                e
            );
        }
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.flush();
    }
}
