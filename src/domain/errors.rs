// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Every failure raised while loading a config file or querying a loaded store is
//! a variant of [`ConfigError`]. Nothing in this crate prints or exits; errors are
//! surfaced to the caller, who decides what to do with them.

use crate::domain::Stem;
use std::path::PathBuf;
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::{ConfigError, Stem};
///
/// let error = ConfigError::MissingKey {
///     key: "host".to_string(),
///     stem: Stem::from("db.us."),
/// };
/// assert_eq!(error.to_string(), "Config - Missing key: host (stem=db.us.)");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A root or included config file could not be opened.
    #[error("Can't open config file: {}, {source}", .path.display())]
    FileOpen {
        /// The file that could not be opened
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Reading a line from an already opened config file failed.
    #[error("Failed reading config file: {}, {source}", .path.display())]
    FileRead {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// An `#INCLUDE` target is already part of the active include chain.
    #[error("Circular or Duplicate file inclusion: {path} found at {included_from}")]
    CircularInclusion {
        /// The file named by the directive
        path: String,
        /// The file containing the directive
        included_from: String,
    },

    /// A `#DEFINE` or `#ENV` target is not wrapped in `<` and `>`.
    #[error("Bad Define - Target must be surrounded by <>: {target}, in line: {line}")]
    MalformedDefine {
        /// The offending target token
        target: String,
        /// The (substituted) line
        line: String,
    },

    /// An `#ENV` directive does not have exactly three tokens.
    #[error("Bad Environment Substitution - Target must be followed with one token (representing environment-variable name): {target}, in line: {line}")]
    MalformedEnv {
        /// The directive's target token
        target: String,
        /// The (substituted) line
        line: String,
    },

    /// An environment variable referenced by `#ENV` is unset or empty.
    #[error("This config requires the environment variable {variable} to be defined according to line: {line}")]
    MissingEnvVar {
        /// The environment variable name
        variable: String,
        /// The (substituted) line
        line: String,
    },

    /// A `key+=` line does not continue the immediately preceding key.
    #[error("Config - Previous key does not match key with +=: {line}, {previous_key}{stem}")]
    ContinuationMismatch {
        /// The continuation line
        line: String,
        /// The key of the previous entry in this file, empty if there is none
        previous_key: String,
        /// The stem of the store being built
        stem: Stem,
    },

    /// `get` was called on a key with no entries.
    #[error("Config - Missing key: {key}{stem}")]
    MissingKey {
        /// The joined key
        key: String,
        /// The stem of the queried store
        stem: Stem,
    },

    /// `get` was called on a key with more than one entry.
    #[error("Config - Duplicate key: {key} ({count} occurrences){stem}")]
    DuplicateKey {
        /// The joined key
        key: String,
        /// Number of entries sharing the key
        count: usize,
        /// The stem of the queried store
        stem: Stem,
    },

    /// `get_n` was called with an index at or beyond the number of entries.
    #[error("Config - Index out-of-range for key {key}: {index} (>= {count}){stem}")]
    IndexOutOfRange {
        /// The joined key
        key: String,
        /// The requested index
        index: usize,
        /// Number of entries for the key
        count: usize,
        /// The stem of the queried store
        stem: Stem,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The OS-specific configuration directory could not be determined.
    #[error("Failed to determine configuration directory for application '{app_name}'")]
    ConfigDirUnavailable {
        /// The application name used for the lookup
        app_name: String,
    },
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_error() {
        let error = ConfigError::FileOpen {
            path: PathBuf::from("missing.cfg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            error.to_string(),
            "Can't open config file: missing.cfg, not found"
        );
    }

    #[test]
    fn test_circular_inclusion_error() {
        let error = ConfigError::CircularInclusion {
            path: "a.cfg".to_string(),
            included_from: "b.cfg".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Circular or Duplicate file inclusion: a.cfg found at b.cfg"
        );
    }

    #[test]
    fn test_missing_key_without_stem() {
        let error = ConfigError::MissingKey {
            key: "db.host".to_string(),
            stem: Stem::default(),
        };
        assert_eq!(error.to_string(), "Config - Missing key: db.host");
    }

    #[test]
    fn test_duplicate_key_with_stem() {
        let error = ConfigError::DuplicateKey {
            key: "email".to_string(),
            count: 3,
            stem: Stem::from("team."),
        };
        assert_eq!(
            error.to_string(),
            "Config - Duplicate key: email (3 occurrences) (stem=team.)"
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let error = ConfigError::IndexOutOfRange {
            key: "fruits".to_string(),
            index: 2,
            count: 2,
            stem: Stem::default(),
        };
        assert_eq!(
            error.to_string(),
            "Config - Index out-of-range for key fruits: 2 (>= 2)"
        );
    }

    #[test]
    fn test_continuation_mismatch_mentions_previous_key() {
        let error = ConfigError::ContinuationMismatch {
            line: "colour+= blue".to_string(),
            previous_key: "shape".to_string(),
            stem: Stem::default(),
        };
        let message = error.to_string();
        assert!(message.contains("colour+= blue"));
        assert!(message.contains("shape"));
    }

    #[test]
    fn test_from_parse_bool_error() {
        let parse_err = "not_a_bool".parse::<bool>().unwrap_err();
        let error = ConfigError::from_parse_bool_error("test.key".to_string(), parse_err);
        assert!(error.to_string().contains("boolean"));
    }
}
