// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory source reader adapter.

use crate::ports::SourceReader;
use std::collections::HashMap;
use std::io::{self, BufRead, Cursor};

/// Serves config "files" from a map of names to text.
///
/// Useful for embedding configs in a binary and for exercising include chains
/// without touching the disk.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::InMemoryReader;
/// use dotcfg::service::Loader;
///
/// let reader = InMemoryReader::new()
///     .with_file("main.cfg", "#INCLUDE base.cfg\nname demo\n")
///     .with_file("base.cfg", "width 24\n");
///
/// let store = Loader::builder().with_reader(reader).build().unwrap().load("main.cfg").unwrap();
/// assert_eq!(store.get(&["width"]).unwrap(), "24");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryReader {
    files: HashMap<String, String>,
}

impl InMemoryReader {
    /// Creates a reader with no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named file.
    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(name.into(), contents.into());
        self
    }
}

impl SourceReader for InMemoryReader {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead>> {
        match self.files.get(path) {
            Some(contents) => Ok(Box::new(Cursor::new(contents.clone().into_bytes()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory file named {}", path),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_known_file() {
        let reader = InMemoryReader::new().with_file("a.cfg", "x 1\ny 2");
        let lines: Vec<String> = reader
            .open("a.cfg")
            .unwrap()
            .lines()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["x 1", "y 2"]);
    }

    #[test]
    fn test_open_unknown_file() {
        let reader = InMemoryReader::new();
        let err = reader.open("missing.cfg").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_with_file_replaces() {
        let reader = InMemoryReader::new()
            .with_file("a.cfg", "old 1")
            .with_file("a.cfg", "new 2");
        let mut line = String::new();
        reader.open("a.cfg").unwrap().read_line(&mut line).unwrap();
        assert_eq!(line, "new 2");
    }
}
