// SPDX-License-Identifier: MIT OR Apache-2.0

//! Textual macro definitions introduced by `#DEFINE` and `#ENV`.

use crate::domain::{ConfigError, Result};
use std::collections::BTreeMap;

/// Maps `<name>` tokens to their substitution text.
///
/// Tokens are kept sorted so that substitution of several defines on one line
/// happens in a stable order.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::DefineTable;
///
/// let mut defines = DefineTable::new();
/// defines.insert("<path>", "/usr/share").unwrap();
/// assert_eq!(defines.apply("lib <path>/lib"), "lib /usr/share/lib");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefineTable {
    definitions: BTreeMap<String, String>,
}

impl DefineTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `target` is wrapped in angle brackets.
    pub fn is_target(target: &str) -> bool {
        target.len() >= 2 && target.starts_with('<') && target.ends_with('>')
    }

    /// Registers a definition, replacing any previous one for the same token.
    ///
    /// Returns the replaced text, if any. Fails if `target` is not `<...>`-wrapped.
    pub fn insert(
        &mut self,
        target: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Option<String>> {
        let target = target.into();
        if !Self::is_target(&target) {
            return Err(ConfigError::MalformedDefine {
                line: target.clone(),
                target,
            });
        }
        Ok(self.definitions.insert(target, definition.into()))
    }

    /// Looks up the substitution text for a token.
    pub fn get(&self, target: &str) -> Option<&str> {
        self.definitions.get(target).map(String::as_str)
    }

    /// Replaces every occurrence of every known token in `line`.
    pub fn apply(&self, line: &str) -> String {
        let mut line = line.to_string();
        for (target, definition) in &self.definitions {
            if line.contains(target.as_str()) {
                line = line.replace(target.as_str(), definition);
            }
        }
        line
    }

    /// Copies every definition of `other` into this table; `other` wins on collision.
    pub fn merge(&mut self, other: DefineTable) {
        self.definitions.extend(other.definitions);
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if no definitions are known.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
