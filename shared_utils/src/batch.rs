//! Batch Processing Module
//!
//! Candidate discovery for directory runs plus the per-run success/failure
//! counters used by the summary report.

use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Collects the regular files under `dir` whose extension is in `extensions`.
///
/// Non-recursive runs only look at the immediate children of `dir`. The order
/// is whatever the directory listing yields. Failing to read `dir` itself is
/// an error; unreadable entries further down the tree are logged and skipped.
pub fn collect_files<S: AsRef<str>>(
    dir: &Path,
    extensions: &[S],
    recursive: bool,
) -> io::Result<Vec<PathBuf>> {
    let meta = std::fs::metadata(dir)?;
    if !meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a directory: {}", dir.display()),
        ));
    }

    let walker = if recursive {
        WalkDir::new(dir).follow_links(true)
    } else {
        WalkDir::new(dir).follow_links(true).max_depth(1)
    };

    let mut files = Vec::new();
    for entry in walker.min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        if entry.file_type().is_file()
            && crate::common_utils::has_extension(entry.path(), extensions)
        {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Same as [`collect_files`], sorted lexicographically by path so reports are
/// reproducible across platforms.
pub fn collect_files_sorted<S: AsRef<str>>(
    dir: &Path,
    extensions: &[S],
    recursive: bool,
) -> io::Result<Vec<PathBuf>> {
    let mut files = collect_files(dir, extensions, recursive)?;
    files.sort();
    Ok(files)
}

/// Raster formats picked up by default.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff"];

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: Vec<(PathBuf, String)>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self {
            total: 0,
            succeeded: 0,
            failed: 0,
            skipped: 0,
            errors: Vec::new(),
        }
    }

    pub fn success(&mut self) {
        self.total += 1;
        self.succeeded += 1;
    }

    pub fn fail(&mut self, path: PathBuf, error: String) {
        self.total += 1;
        self.failed += 1;
        self.errors.push((path, error));
    }

    pub fn skip(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.succeeded as f64 / self.total as f64) * 100.0
        }
    }
}

impl Default for BatchResult {
    fn default() -> Self {
        Self::new()
    }
}
