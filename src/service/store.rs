// SPDX-License-Identifier: MIT OR Apache-2.0

//! The loaded, read-only configuration store.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Entry, Result, Stem};
use crate::service::Loader;
use std::collections::{HashMap, HashSet};

/// An ordered list of key/value entries with dotted-namespace queries.
///
/// Entries keep the order in which they appeared in the source files, with
/// included files spliced in at their `#INCLUDE` directive. A key may occur any
/// number of times. Key paths are given as slices of segments that are joined
/// with `.` (`&["db", "us", "host"]` is the key `db.us.host`).
///
/// A store is never modified after construction. [`descend`](Self::descend)
/// produces a new, independent store.
///
/// # Examples
///
/// ```rust
/// use dotcfg::domain::Entry;
/// use dotcfg::service::ConfigStore;
///
/// let store = ConfigStore::from_entries(vec![
///     Entry::new("db.us.host", "10.144.1.1"),
///     Entry::new("db.us.port", "1111"),
///     Entry::new("db.uk.host", "10.144.1.2"),
/// ]);
///
/// assert_eq!(store.sub_keys(&["db"]), vec!["us", "uk"]);
/// assert_eq!(store.descend(&["db", "us"]).get(&["port"]).unwrap(), "1111");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigStore {
    entries: Vec<Entry>,
    /// Positions in `entries` for each distinct key, in insertion order
    index: HashMap<String, Vec<usize>>,
    stem: Stem,
}

impl ConfigStore {
    /// Loads `path` from the file system, resolving `#ENV` against the process
    /// environment.
    ///
    /// Use [`Loader::builder`] to read through other collaborators.
    pub fn load(path: &str) -> Result<Self> {
        Loader::new().load(path)
    }

    /// Creates a root store holding `entries` in the given order.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self::with_stem(entries, Stem::default())
    }

    fn with_stem(entries: Vec<Entry>, stem: Stem) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            index
                .entry(entry.key.as_str().to_string())
                .or_default()
                .push(i);
        }

        Self {
            entries,
            index,
            stem,
        }
    }

    fn positions(&self, key: &str) -> &[usize] {
        self.index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if at least one entry has exactly this key.
    pub fn has<S: AsRef<str>>(&self, path: &[S]) -> bool {
        !self.positions(ConfigKey::join(path).as_str()).is_empty()
    }

    /// Returns the single value for a key.
    ///
    /// Fails with [`ConfigError::MissingKey`] if the key does not occur and with
    /// [`ConfigError::DuplicateKey`] if it occurs more than once; use
    /// [`get_n`](Self::get_n) and [`size`](Self::size) for multi-valued keys.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Result<&str> {
        self.value(path).map(ConfigValue::as_str)
    }

    /// Like [`get`](Self::get), returning the value for typed conversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotcfg::domain::Entry;
    /// use dotcfg::service::ConfigStore;
    ///
    /// let store = ConfigStore::from_entries(vec![Entry::new("server.port", "8080")]);
    /// let port: u32 = store.value(&["server", "port"]).unwrap().parse("server.port").unwrap();
    /// assert_eq!(port, 8080);
    /// ```
    pub fn value<S: AsRef<str>>(&self, path: &[S]) -> Result<&ConfigValue> {
        let key = ConfigKey::join(path);
        match self.positions(key.as_str()) {
            [] => Err(ConfigError::MissingKey {
                key: key.into_string(),
                stem: self.stem.clone(),
            }),
            [i] => Ok(&self.entries[*i].value),
            many => Err(ConfigError::DuplicateKey {
                key: key.into_string(),
                count: many.len(),
                stem: self.stem.clone(),
            }),
        }
    }

    /// Returns the `index`-th value (zero-based, in file order) of a key.
    ///
    /// Fails with [`ConfigError::IndexOutOfRange`] if `index` is not below
    /// [`size`](Self::size).
    pub fn get_n<S: AsRef<str>>(&self, index: usize, path: &[S]) -> Result<&str> {
        self.value_n(index, path).map(ConfigValue::as_str)
    }

    /// Like [`get_n`](Self::get_n), returning the value for typed conversion.
    pub fn value_n<S: AsRef<str>>(&self, index: usize, path: &[S]) -> Result<&ConfigValue> {
        let key = ConfigKey::join(path);
        let positions = self.positions(key.as_str());
        match positions.get(index) {
            Some(i) => Ok(&self.entries[*i].value),
            None => Err(ConfigError::IndexOutOfRange {
                key: key.into_string(),
                index,
                count: positions.len(),
                stem: self.stem.clone(),
            }),
        }
    }

    /// Returns whether the single value of a key equals `expected`.
    ///
    /// Fails exactly as [`get`](Self::get) does.
    pub fn is<S: AsRef<str>>(&self, path: &[S], expected: &str) -> Result<bool> {
        Ok(self.get(path)? == expected)
    }

    /// Number of entries with this key (0 if none).
    pub fn size<S: AsRef<str>>(&self, path: &[S]) -> usize {
        self.positions(ConfigKey::join(path).as_str()).len()
    }

    /// Returns the distinct segments directly below a prefix, in order of first
    /// appearance.
    ///
    /// Given `db.us.host`, `db.us.port` and `db.gb.host`, `sub_keys(&["db"])` is
    /// `["us", "gb"]` and `sub_keys(&["db", "us", "port"])` is empty.
    pub fn sub_keys<S: AsRef<str>>(&self, prefix: &[S]) -> Vec<String> {
        let prefix = ConfigKey::join(prefix).namespace();
        let mut seen = HashSet::new();
        let mut result = Vec::new();

        for entry in &self.entries {
            if let Some(segment) = entry.key.segment_after(&prefix) {
                if seen.insert(segment) {
                    result.push(segment.to_string());
                }
            }
        }

        result
    }

    /// Returns true if some key starts with the joined path.
    ///
    /// Needs at least two segments (a prefix and a candidate sub-key name);
    /// fewer always yields false. Unlike [`has_prefix`](Self::has_prefix) this is a
    /// raw string-prefix test with no trailing separator, so `["db", "u"]`
    /// matches `db.us.host`.
    pub fn has_sub_key<S: AsRef<str>>(&self, stems: &[S]) -> bool {
        if stems.len() < 2 {
            return false;
        }

        let prefix = ConfigKey::join(stems);
        self.entries
            .iter()
            .any(|entry| entry.key.starts_with(prefix.as_str()))
    }

    /// Returns true if the joined path names a namespace, i.e. some key starts
    /// with it followed by `.`. A complete leaf key is not a prefix.
    pub fn has_prefix<S: AsRef<str>>(&self, stems: &[S]) -> bool {
        let prefix = ConfigKey::join(stems).namespace();
        self.entries.iter().any(|entry| entry.key.starts_with(&prefix))
    }

    /// Returns a new store with the entries under a namespace, prefix removed.
    ///
    /// Order is preserved. The new store's stem is this store's stem plus the
    /// stripped prefix. If nothing matches, the result is a valid, empty store.
    pub fn descend<S: AsRef<str>>(&self, stems: &[S]) -> ConfigStore {
        let prefix = ConfigKey::join(stems).namespace();
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry
                    .key
                    .as_str()
                    .strip_prefix(prefix.as_str())
                    .map(|rest| Entry::new(rest, entry.value.clone()))
            })
            .collect();

        ConfigStore::with_stem(entries, self.stem.extend(&prefix))
    }

    /// All entries in order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Distinct keys in order of first appearance.
    pub fn keys(&self) -> Vec<&ConfigKey> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|entry| &entry.key)
            .filter(|key| seen.insert(key.as_str()))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The namespace prefix this store was descended through.
    pub fn stem(&self) -> &Stem {
        &self.stem
    }
}
