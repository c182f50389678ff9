//! File-backed key-value backend
//!
//! One file per key under a data directory. Writes go to a temporary file
//! that is renamed over the target, so a failed write leaves the old value.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, instrument};

use gallery_core::error::DomainError;
use gallery_core::traits::{RepoResult, StorageBackend};

use super::entry_size;
use crate::error::{map_io_error, quota_exceeded};

const VALUE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "tmp";

/// Durable backend storing each key as `<dir>/<key>.json`
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
    quota_bytes: Option<usize>,
    write_lock: Mutex<()>,
}

impl FileBackend {
    /// Open (creating if needed) a data directory
    pub fn open(dir: impl Into<PathBuf>) -> RepoResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(map_io_error)?;
        Ok(Self {
            dir,
            quota_bytes: None,
            write_lock: Mutex::new(()),
        })
    }

    /// Bound total usage by `quota_bytes`
    #[must_use]
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> RepoResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DomainError::InvalidValue {
                field: "storage key",
                value: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.{VALUE_EXTENSION}")))
    }

    /// Bytes used by every key except `skip`
    fn used_bytes_except(&self, skip: &str) -> RepoResult<usize> {
        let mut used = 0;
        for entry in fs::read_dir(&self.dir).map_err(map_io_error)? {
            let path = entry.map_err(map_io_error)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(VALUE_EXTENSION) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if key == skip {
                continue;
            }
            let len = fs::metadata(&path).map_err(map_io_error)?.len();
            used += key.len() + len as usize;
        }
        Ok(used)
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(e)),
        }
    }

    #[instrument(skip(self, value), fields(dir = %self.dir.display(), len = value.len()))]
    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock();

        if let Some(quota) = self.quota_bytes {
            let used = self.used_bytes_except(key)?;
            if used + entry_size(key, value) > quota {
                debug!(quota, used, "Write rejected by quota");
                return Err(quota_exceeded(key));
            }
        }

        let temp = path.with_extension(TEMP_EXTENSION);
        fs::write(&temp, value).map_err(map_io_error)?;
        fs::rename(&temp, &path).map_err(map_io_error)
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(e)),
        }
    }
}
