// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source reader trait definition.
//!
//! This module defines the `SourceReader` trait, the port through which the loader
//! opens config files. Keeping it behind a trait lets the same loader read from
//! disk, from memory in tests, or from anything else that can hand back lines.

use std::io::{self, BufRead};

/// A trait for opening config files by name.
///
/// `open` must fail for a name that cannot be opened (missing file, permission
/// denied); end of file is signalled by the returned reader, not by an error.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a configured loader can be shared.
///
/// # Examples
///
/// ```rust
/// use dotcfg::ports::SourceReader;
/// use std::io::{self, BufRead, Cursor};
///
/// struct OneFile;
///
/// impl SourceReader for OneFile {
///     fn open(&self, path: &str) -> io::Result<Box<dyn BufRead>> {
///         if path == "app.cfg" {
///             Ok(Box::new(Cursor::new("name demo\n")))
///         } else {
///             Err(io::Error::new(io::ErrorKind::NotFound, path.to_string()))
///         }
///     }
/// }
///
/// assert!(OneFile.open("app.cfg").is_ok());
/// assert!(OneFile.open("other.cfg").is_err());
/// ```
pub trait SourceReader: Send + Sync {
    /// Opens `path` for line-by-line reading.
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead>>;
}
