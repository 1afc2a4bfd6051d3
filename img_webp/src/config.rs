//! Conversion settings shared by every file of a run.

use crate::{ImgConvertError, Result};
use shared_utils::common_utils::normalize_extension;
use shared_utils::IMAGE_EXTENSIONS;

pub const DEFAULT_QUALITY: u8 = 90;
pub const DEFAULT_REPORT_NAME: &str = "couleurs_dominantes.txt";
pub const OUTPUT_EXTENSION: &str = "webp";

/// Immutable per-run configuration.
///
/// Built once (from CLI flags or in code) and passed by reference to the
/// converter. Extensions are stored lowercase without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub extensions: Vec<String>,
    /// WebP quality, 0-100.
    pub quality: u8,
    pub recursive: bool,
    /// File name of the color report, written in the base directory.
    pub report_name: String,
    /// Process candidates in lexicographic path order instead of listing order.
    pub sort: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            quality: DEFAULT_QUALITY,
            recursive: false,
            report_name: DEFAULT_REPORT_NAME.to_string(),
            sort: true,
        }
    }
}

impl ConvertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the accepted extensions. Entries are normalised (`".JPG"` →
    /// `"jpg"`), blanks dropped and duplicates removed.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            if let Some(ext) = normalize_extension(ext.as_ref()) {
                if !normalized.contains(&ext) {
                    normalized.push(ext);
                }
            }
        }
        self.extensions = normalized;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_report_name(mut self, name: impl Into<String>) -> Self {
        self.report_name = name.into();
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.quality > 100 {
            return Err(ImgConvertError::InvalidQuality(self.quality));
        }
        if self.extensions.is_empty() {
            return Err(ImgConvertError::NoExtensions);
        }
        let name = self.report_name.as_str();
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains(std::path::MAIN_SEPARATOR)
        {
            return Err(ImgConvertError::InvalidReportName(self.report_name.clone()));
        }
        Ok(())
    }
}
