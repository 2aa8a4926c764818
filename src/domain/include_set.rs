// SPDX-License-Identifier: MIT OR Apache-2.0

//! The set of files in the active include chain.

use std::collections::HashSet;

/// File names already opened by the current chain of `#INCLUDE` directives.
///
/// The set is passed down to nested includes by copy and merged back up by
/// [`union`](Self::union), never shared mutably between call frames.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::IncludeSet;
///
/// let parent = IncludeSet::seeded("main.cfg");
/// let mut child = parent.clone();
/// child.insert("base.cfg");
///
/// let merged = parent.union(&child);
/// assert!(merged.contains("main.cfg"));
/// assert!(merged.contains("base.cfg"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncludeSet {
    files: HashSet<String>,
}

impl IncludeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding a single file.
    pub fn seeded(file: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(file);
        set
    }

    /// Adds a file. Returns false if it was already present.
    pub fn insert(&mut self, file: impl Into<String>) -> bool {
        self.files.insert(file.into())
    }

    /// Membership test.
    pub fn contains(&self, file: &str) -> bool {
        self.files.contains(file)
    }

    /// Returns a new set with the members of both.
    pub fn union(&self, other: &IncludeSet) -> IncludeSet {
        IncludeSet {
            files: self.files.union(&other.files).cloned().collect(),
        }
    }

    /// Number of files in the set.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = IncludeSet::new();
        assert!(set.insert("a.cfg"));
        assert!(!set.insert("a.cfg"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_union_leaves_inputs_untouched() {
        let left = IncludeSet::seeded("a.cfg");
        let right = IncludeSet::seeded("b.cfg");
        let merged = left.union(&right);

        assert_eq!(merged.len(), 2);
        assert!(!left.contains("b.cfg"));
        assert!(!right.contains("a.cfg"));
    }

    #[test]
    fn test_empty() {
        assert!(IncludeSet::new().is_empty());
        assert!(!IncludeSet::seeded("x").is_empty());
    }
}
