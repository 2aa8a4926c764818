// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single parsed key/value pair.

use crate::domain::{ConfigKey, ConfigValue};
use serde::{Deserialize, Serialize};

/// One key/value pair, in the order it appeared in the source files.
///
/// Several entries may share a key; that is how multi-valued keys are expressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The dotted key
    pub key: ConfigKey,
    /// The value text
    pub value: ConfigValue,
}

impl Entry {
    /// Creates an entry from anything convertible into a key and a value.
    pub fn new(key: impl Into<ConfigKey>, value: impl Into<ConfigValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
