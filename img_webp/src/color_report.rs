//! Dominant color report (`<name> : #rrggbb`, one line per converted image).

use crate::dominant_color::HexColor;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorReport {
    lines: Vec<String>,
}

impl ColorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, color: HexColor) {
        self.lines.push(format!("{} : {}", name, color));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Newline-joined lines, no trailing newline.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Replaces `dir/file_name` with this run's lines. An empty report writes
    /// nothing and leaves any previous file as it was.
    pub fn write_if_any(&self, dir: &Path, file_name: &str) -> io::Result<Option<PathBuf>> {
        if self.is_empty() {
            return Ok(None);
        }
        let path = dir.join(file_name);
        fs::write(&path, self.render())?;
        Ok(Some(path))
    }
}
