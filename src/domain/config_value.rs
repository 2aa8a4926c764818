// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with typed conversions.
//!
//! Values in a config file are always text: the remaining tokens of a line,
//! re-joined with single spaces. `ConfigValue` keeps that text and offers
//! conversions to common Rust types at the point of use.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The value half of a config entry.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::ConfigValue;
///
/// let value = ConfigValue::from("1111");
/// assert_eq!(value.as_str(), "1111");
/// assert_eq!(value.parse::<u32>("db.us.port").unwrap(), 1111);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an owned copy of the value.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Appends a continuation to the value, separated by a single space.
    pub(crate) fn append(&mut self, more: &str) {
        self.0.push(' ');
        self.0.push_str(more);
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::domain::ConfigValue;
    ///
    /// assert!(ConfigValue::from("yes").as_bool("feature.enabled").unwrap());
    /// assert!(!ConfigValue::from("Off").as_bool("feature.enabled").unwrap());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::domain::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("10.144.1.1");
    /// let ip: IpAddr = value.parse("db.us.host").unwrap();
    /// assert_eq!(ip.to_string(), "10.144.1.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
