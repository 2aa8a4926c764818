// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable lookup adapters.

use crate::ports::Environment;
use std::collections::HashMap;
use std::env;

/// Looks variables up in the process environment.
///
/// Values that are not valid unicode are decoded lossily rather than treated as
/// unset.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::ProcessEnv;
/// use dotcfg::ports::Environment;
///
/// let env = ProcessEnv::new();
/// assert!(env.var("DOTCFG_SURELY_NOT_SET_ANYWHERE").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Creates a new process environment adapter.
    pub fn new() -> Self {
        ProcessEnv
    }
}

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        let value = env::var_os(name)?;
        if value.to_str().is_none() {
            tracing::debug!("Environment variable {} is not unicode, decoding lossily", name);
        }
        Some(value.to_string_lossy().into_owned())
    }
}

/// A fixed set of variables, independent of the process environment.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::StaticEnv;
/// use dotcfg::ports::Environment;
///
/// let env = StaticEnv::new().with_var("CFG_TEST", "all-good");
/// assert_eq!(env.var("CFG_TEST").as_deref(), Some("all-good"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    values: HashMap<String, String>,
}

impl StaticEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of values.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Adds (or replaces) a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl Environment for StaticEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
