//! Read-only festival dataset on local disk.
//!
//! One JSON document per country, named `{COUNTRY}.json`, inside a fixed
//! directory. Files are read whole on every call; nothing is cached.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::country::CountryCode;

/// Errors from the festival dataset.
///
/// A missing file and an unreadable file are kept apart: the first is a
/// client-facing "not found", the second a server-side fault.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// No dataset file exists for this country.
    #[error("no festival dataset for {country}")]
    NotFound { country: String },

    /// The file exists but could not be read or is not valid JSON.
    #[error("failed to read {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },
}

/// Festival records keyed by country code.
#[derive(Debug, Clone)]
pub struct FestivalStore {
    dir: PathBuf,
}

impl FestivalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the per-country files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the dataset file for `country`.
    ///
    /// Returns `None` unless every character of the code is alphanumeric, so
    /// separators, dots and absolute paths never reach the filesystem.
    pub fn path_for(&self, country: &CountryCode) -> Option<PathBuf> {
        if !country.as_str().chars().all(char::is_alphanumeric) {
            return None;
        }
        Some(self.dir.join(format!("{}.json", country)))
    }

    /// Load and parse the festival records for `country`.
    ///
    /// # Errors
    ///
    /// - `DatasetError::NotFound` if `{COUNTRY}.json` does not exist or the
    ///   code cannot name a file in the dataset directory
    /// - `DatasetError::ReadFailed` on any I/O error or invalid JSON
    pub fn load(&self, country: &CountryCode) -> Result<Value, DatasetError> {
        let Some(path) = self.path_for(country) else {
            return Err(DatasetError::NotFound { country: country.to_string() });
        };

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DatasetError::NotFound { country: country.to_string() });
            }
            Err(e) => return Err(DatasetError::ReadFailed { path, reason: e.to_string() }),
        };

        serde_json::from_slice(&bytes).map_err(|e| DatasetError::ReadFailed { path, reason: e.to_string() })
    }

    /// Sorted names of every entry in the dataset directory.
    ///
    /// Errors are the raw filesystem errors; callers decide how to surface them.
    pub fn list_files(&self) -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(&self.dir)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}
