// SPDX-License-Identifier: MIT OR Apache-2.0

//! The namespace prefix a store was descended through.

use std::fmt;

/// The accumulated prefix (e.g. `db.us.`) of a descended store.
///
/// A stem only exists to make error messages traceable. It displays as
/// ` (stem=db.us.)`, or as nothing at all for a root store, so it can be
/// appended directly to a message.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::Stem;
///
/// assert_eq!(Stem::default().to_string(), "");
/// assert_eq!(Stem::from("db.").extend("us.").to_string(), " (stem=db.us.)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stem(String);

impl Stem {
    /// Returns a new stem with `prefix` appended.
    pub fn extend(&self, prefix: &str) -> Self {
        Stem(format!("{}{}", self.0, prefix))
    }

    /// Returns the raw prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for a root (non-descended) store.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Stem {
    fn from(s: &str) -> Self {
        Stem(s.to_string())
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, " (stem={})", self.0)
    }
}
