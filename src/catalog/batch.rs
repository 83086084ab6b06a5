use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Result;
use crate::models::FontInfo;
use super::scan::Catalog;

/// Fonts found in one directory of a batch
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub dir: PathBuf,
    pub fonts: Vec<FontInfo>,
}

/// Read the directories listed in a batch file.
///
/// One path per line; blank lines and lines starting with `#` are ignored.
pub fn read_batch_file(batch_file: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(batch_file)?;
    Ok(parse_batch_list(&content))
}

pub fn parse_batch_list(content: &str) -> Vec<PathBuf> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect()
}

/// Scan every directory listed in a batch file.
///
/// Entries that are not directories are skipped with a warning, as are
/// directories that cannot be read, so one bad entry never stops the batch.
pub fn batch_scan(catalog: &Catalog, batch_file: &Path) -> Result<Vec<BatchResult>> {
    let dirs = read_batch_file(batch_file)?;
    info!(
        "Found {} directories to process in {}",
        dirs.len(),
        batch_file.display()
    );

    let mut results = Vec::with_capacity(dirs.len());
    for (i, dir) in dirs.into_iter().enumerate() {
        if !dir.is_dir() {
            warn!("'{}' is not a valid directory, skipping", dir.display());
            continue;
        }
        info!("Processing directory {}: {}", i + 1, dir.display());
        match catalog.scan(&dir) {
            Ok(fonts) => results.push(BatchResult { dir, fonts }),
            Err(e) => warn!("Failed to scan {}: {}", dir.display(), e),
        }
    }
    Ok(results)
}
