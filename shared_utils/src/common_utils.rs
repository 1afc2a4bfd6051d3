//! Common Utilities Module
//!
//! Small path helpers shared by discovery and conversion:
//! - lowercase extension lookup and matching
//! - sibling output path derivation
//! - display names for status lines and report entries

use std::path::{Path, PathBuf};

// ═══════════════════════════════════════════════════════════════
// Extensions
// ═══════════════════════════════════════════════════════════════

/// Lowercase extension of `path`, or an empty string when there is none.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use shared_utils::common_utils::get_extension_lowercase;
///
/// assert_eq!(get_extension_lowercase(Path::new("test.JPG")), "jpg");
/// assert_eq!(get_extension_lowercase(Path::new("noext")), "");
/// ```
pub fn get_extension_lowercase(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// Checks the extension of `path` against a list of lowercase extensions
/// (without the leading dot). The comparison ignores the case of the path.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use shared_utils::common_utils::has_extension;
///
/// let extensions = &["jpg", "png"];
/// assert!(has_extension(Path::new("photo.JPG"), extensions));
/// assert!(!has_extension(Path::new("clip.mp4"), extensions));
/// ```
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let ext = get_extension_lowercase(path);
    if ext.is_empty() {
        return false;
    }
    extensions.iter().any(|e| e.as_ref() == ext)
}

/// Normalises a user supplied extension: trims whitespace and a leading dot,
/// lowercases the rest. Returns `None` for an empty result.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

// ═══════════════════════════════════════════════════════════════
// Paths
// ═══════════════════════════════════════════════════════════════

/// Sibling path with the extension replaced: `dir/photo.JPG` → `dir/photo.webp`.
///
/// Only the last extension is replaced, so `a.b.png` becomes `a.b.webp`.
pub fn sibling_with_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

/// Basename without its last extension, lossily converted for display.
pub fn file_stem_lossy(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Basename with extension, lossily converted for display.
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // Any letter-case spelling of an accepted extension must match; the
    // same stem with a foreign extension must not.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn has_extension_is_case_insensitive(
            stem in "[a-zA-Z0-9_-]{1,12}",
            idx in 0usize..5,
            mask in proptest::collection::vec(any::<bool>(), 4),
        ) {
            let accepted = ["jpg", "jpeg", "png", "bmp", "tiff"];
            let ext: String = accepted[idx]
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
                .collect();
            let path = PathBuf::from(format!("{}.{}", stem, ext));
            prop_assert!(has_extension(&path, &accepted));

            let foreign = PathBuf::from(format!("{}.{}x", stem, ext));
            prop_assert!(!has_extension(&foreign, &accepted));
        }
    }
}
