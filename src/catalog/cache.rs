use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use log::debug;

use crate::error::Result;
use crate::font::parse_font_file;
use crate::models::FontMetadata;

/// Identity of a file's contents: its canonical path plus modification time and size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileKey {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl FileKey {
    pub fn for_path(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path)?;
        Ok(FileKey {
            path: fs::canonicalize(path)?,
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Parsed metadata for each canonical path, shareable across threads.
///
/// An entry is reused only while its [`FileKey`] still matches the file. Only
/// successful parses are stored, so a file that failed is retried on the next
/// lookup.
#[derive(Debug, Default)]
pub struct MetadataCache {
    entries: RwLock<HashMap<PathBuf, (FileKey, Arc<FontMetadata>)>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached metadata for `path`, parsing the file if it is new or
    /// has changed since it was cached.
    pub fn get_or_parse(&self, path: &Path) -> Result<Arc<FontMetadata>> {
        let key = FileKey::for_path(path)?;

        let cached = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key.path)
            .filter(|(cached_key, _)| *cached_key == key)
            .map(|(_, metadata)| Arc::clone(metadata));
        if let Some(metadata) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(metadata);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let metadata = Arc::new(parse_font_file(path)?);

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let stale = entries.insert(key.path.clone(), (key, Arc::clone(&metadata)));
        if stale.is_some() {
            debug!("Replaced stale cache entry for {}", path.display());
        }
        Ok(metadata)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that had to parse the file
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}
