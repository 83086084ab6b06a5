use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::font::is_font_file;
use crate::models::{Config, FontInfo};
use crate::utils::display_name;
use super::cache::MetadataCache;

/// Find font files in a directory, descending into sub-directories when `recursive`
pub fn find_font_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InvalidPath(dir.to_path_buf()));
    }

    let mut font_files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if path.is_file() && is_font_file(&path) {
            font_files.push(path);
        } else if recursive && path.is_dir() {
            font_files.append(&mut find_font_files(&path, recursive)?);
        }
    }

    font_files.sort();
    Ok(font_files)
}

/// Parses font files into [`FontInfo`] records, sharing one metadata cache.
pub struct Catalog {
    config: Config,
    cache: Arc<MetadataCache>,
}

impl Catalog {
    pub fn new(config: Config) -> Self {
        Self::with_cache(config, Arc::new(MetadataCache::new()))
    }

    pub fn with_cache(config: Config, cache: Arc<MetadataCache>) -> Self {
        Catalog { config, cache }
    }

    pub fn cache(&self) -> &Arc<MetadataCache> {
        &self.cache
    }

    /// Parse one font file
    pub fn try_load_font_info(&self, path: &Path) -> Result<FontInfo> {
        let metadata = self.cache.get_or_parse(path)?;
        Ok(FontInfo {
            display_name: display_name(&metadata, &self.config.locale, path),
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            metadata: (*metadata).clone(),
        })
    }

    /// Parse one font file, logging and discarding any failure
    pub fn load_font_info(&self, path: &Path) -> Option<FontInfo> {
        match self.try_load_font_info(path) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Failed to parse font file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Parse every font found under `dir`.
    ///
    /// Files that fail to parse are left out; only an unreadable `dir` is an error.
    pub fn scan(&self, dir: &Path) -> Result<Vec<FontInfo>> {
        self.scan_all(&[dir.to_path_buf()])
    }

    /// Parse every font found under each of `roots`.
    ///
    /// Roots may be directories or individual font files. When the same file
    /// name appears more than once only the first occurrence is kept.
    pub fn scan_all(&self, roots: &[PathBuf]) -> Result<Vec<FontInfo>> {
        let mut paths = Vec::new();
        for root in roots {
            if root.is_file() {
                paths.push(root.clone());
            } else {
                paths.append(&mut find_font_files(root, self.config.recursive)?);
            }
        }
        info!("Found {} font files", paths.len());

        let parsed = self.parse_all(&paths)?;
        let failed = paths.len() - parsed.len();
        if failed > 0 {
            warn!("{} of {} font files could not be parsed", failed, paths.len());
        }

        let mut seen = HashSet::new();
        let mut fonts: Vec<FontInfo> = parsed
            .into_iter()
            .filter(|info| {
                let first = seen.insert(info.file_name.clone());
                if !first {
                    debug!("Ignoring duplicate file name: {}", info.path.display());
                }
                first
            })
            .collect();
        fonts.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.path.cmp(&b.path))
        });
        Ok(fonts)
    }

    fn parse_all(&self, paths: &[PathBuf]) -> Result<Vec<FontInfo>> {
        let parse = || -> Vec<FontInfo> {
            paths
                .par_iter()
                .filter_map(|path| self.load_font_info(path))
                .collect()
        };

        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| Error::Config(format!("cannot start worker threads: {e}")))?;
                Ok(pool.install(parse))
            }
            None => Ok(parse()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_invalid_path() {
        let err = find_font_files(Path::new("/definitely/not/here"), false).unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
    }

    #[test]
    fn non_font_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.txt"), b"hello").unwrap();
        // right extension, wrong magic
        fs::write(dir.path().join("fake.ttf"), b"not a font").unwrap();
        fs::write(dir.path().join("real.TTF"), [0x00, 0x01, 0x00, 0x00, 0, 0]).unwrap();

        let found = find_font_files(dir.path(), false).unwrap();
        assert_eq!(found, vec![dir.path().join("real.TTF")]);
    }

    #[test]
    fn recursion_is_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("a.otf"), b"OTTO\0\0").unwrap();

        assert!(find_font_files(dir.path(), false).unwrap().is_empty());
        assert_eq!(find_font_files(dir.path(), true).unwrap().len(), 1);
    }
}
