// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-system source reader adapter.

use crate::ports::SourceReader;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Reads config files from the local file system.
///
/// Paths are used exactly as written in the config (relative paths resolve
/// against the process's working directory).
///
/// # Examples
///
/// ```rust,no_run
/// use dotcfg::adapters::FsReader;
/// use dotcfg::ports::SourceReader;
/// use std::io::BufRead;
///
/// let reader = FsReader::new();
/// for line in reader.open("/etc/myapp/app.cfg").unwrap().lines() {
///     println!("{}", line.unwrap());
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FsReader {
    /// Creates a new file-system reader.
    pub fn new() -> Self {
        FsReader
    }
}

impl SourceReader for FsReader {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        tracing::trace!("Opened config file {}", path);
        Ok(Box::new(BufReader::new(file)))
    }
}
