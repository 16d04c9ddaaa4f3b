//! Document text extraction - infrastructure layer.
//!
//! The pipeline only depends on the `DocumentTextExtractor` capability:
//! give it a source path, get back an identifier and one text blob.
//! `PlainTextExtractor` covers the pre-extracted `.txt` case.

use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Text extraction capability.
#[async_trait]
pub trait DocumentTextExtractor: Send + Sync {
    /// Enumerate the source files under a folder.
    ///
    /// A missing folder is a fatal error; an unreadable individual file is
    /// not (it fails later, in `extract`, and gets skipped).
    async fn list_sources(&self, folder: &str) -> AppResult<Vec<PathBuf>>;

    /// Extract `(source_id, full_text)` from one source file.
    async fn extract(&self, path: &Path) -> AppResult<(String, String)>;
}

/// Extractor for plain `.txt` exam files.
pub struct PlainTextExtractor {
    year_pattern: Regex,
}

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self {
            year_pattern: Regex::new(r"(20\d{2}|19\d{2})").expect("year pattern compiles"),
        }
    }

    /// Derive the source identifier from the file name: the first
    /// plausible year, or the bare file stem when none is present.
    fn derive_source_id(&self, path: &Path) -> String {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        self.year_pattern
            .find(&file_name)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| {
                path.file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or(file_name)
            })
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentTextExtractor for PlainTextExtractor {
    async fn list_sources(&self, folder: &str) -> AppResult<Vec<PathBuf>> {
        let folder_path = PathBuf::from(folder);
        if !folder_path.exists() {
            return Err(AppError::directory_not_found(folder));
        }

        let mut sources = Vec::new();
        let mut entries = tokio::fs::read_dir(&folder_path)
            .await
            .map_err(|e| AppError::file_read_failed(folder, e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::file_read_failed(folder, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("txt") {
                sources.push(path);
            }
        }

        // Directory order is platform-dependent; reports must be
        // reproducible, so fix it.
        sources.sort();
        Ok(sources)
    }

    async fn extract(&self, path: &Path) -> AppResult<(String, String)> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let source_id = self.derive_source_id(path);
        debug!(
            "extracted {} chars from {} (source {})",
            text.chars().count(),
            path.display(),
            source_id
        );

        Ok((source_id, text))
    }
}
