// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for dotted key paths.
//!
//! Dots carry no meaning to the parser; a key is just a string. The helpers here
//! are what the namespace queries (`sub_keys`, `has_prefix`, `descend`) build on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between hierarchical key segments.
pub const SEGMENT_SEPARATOR: char = '.';

/// A dot-delimited configuration key such as `db.us.host`.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::ConfigKey;
///
/// let key = ConfigKey::join(&["db", "us", "host"]);
/// assert_eq!(key.as_str(), "db.us.host");
/// assert_eq!(key.namespace(), "db.us.host.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Joins path segments with `.` into a single key.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::domain::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::join(&["server", "port"]).as_str(), "server.port");
    /// assert_eq!(ConfigKey::join(&["menu"]).as_str(), "menu");
    /// ```
    pub fn join<S: AsRef<str>>(segments: &[S]) -> Self {
        let mut joined = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                joined.push(SEGMENT_SEPARATOR);
            }
            joined.push_str(segment.as_ref());
        }
        ConfigKey(joined)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns this key followed by a trailing separator, i.e. the prefix shared by
    /// every key living underneath it.
    pub fn namespace(&self) -> String {
        format!("{}{}", self.0, SEGMENT_SEPARATOR)
    }

    /// Plain string-prefix test, with no separator appended.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Strips `prefix` and returns the first remaining segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::domain::ConfigKey;
    ///
    /// let key = ConfigKey::from("db.us.host");
    /// assert_eq!(key.segment_after("db."), Some("us"));
    /// assert_eq!(key.segment_after("db.us."), Some("host"));
    /// assert_eq!(key.segment_after("web."), None);
    /// ```
    pub fn segment_after(&self, prefix: &str) -> Option<&str> {
        self.0
            .strip_prefix(prefix)
            .and_then(|rest| rest.split(SEGMENT_SEPARATOR).next())
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ConfigKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_single_segment() {
        assert_eq!(ConfigKey::join(&["slogan"]).as_str(), "slogan");
    }

    #[test]
    fn test_join_many_segments() {
        let key = ConfigKey::join(&["db", "uk", "port"]);
        assert_eq!(key.as_str(), "db.uk.port");
    }

    #[test]
    fn test_join_owned_segments() {
        let segments = vec!["a".to_string(), "b".to_string()];
        assert_eq!(ConfigKey::join(&segments).as_str(), "a.b");
    }

    #[test]
    fn test_namespace_appends_separator() {
        assert_eq!(ConfigKey::from("db").namespace(), "db.");
    }

    #[test]
    fn test_starts_with_is_raw_prefix() {
        let key = ConfigKey::from("db.usa.host");
        assert!(key.starts_with("db.us"));
        assert!(!key.starts_with("db.us."));
    }

    #[test]
    fn test_segment_after_leaf() {
        let key = ConfigKey::from("db.us");
        assert_eq!(key.segment_after("db."), Some("us"));
    }

    #[test]
    fn test_segment_after_exact_namespace_is_empty() {
        // "db." itself is a legal (if odd) key
        let key = ConfigKey::from("db.");
        assert_eq!(key.segment_after("db."), Some(""));
    }

    #[test]
    fn test_display_and_into_string() {
        let key = ConfigKey::from("test.key");
        assert_eq!(format!("{}", key), "test.key");
        assert_eq!(key.into_string(), "test.key");
    }

    #[test]
    fn test_eq_str() {
        assert!(ConfigKey::from("width") == *"width");
    }
}
