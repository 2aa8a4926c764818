// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment lookup trait definition.

/// A trait for looking up environment variables, consumed by `#ENV` directives.
///
/// Returning `None` and returning an empty string are treated the same by the
/// loader: both mean the variable is not usable.
///
/// # Examples
///
/// ```rust
/// use dotcfg::ports::Environment;
///
/// struct Fixed;
///
/// impl Environment for Fixed {
///     fn var(&self, name: &str) -> Option<String> {
///         (name == "STAGE").then(|| "prod".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.var("STAGE").as_deref(), Some("prod"));
/// assert_eq!(Fixed.var("OTHER"), None);
/// ```
pub trait Environment: Send + Sync {
    /// Returns the value of the variable `name`, if set.
    fn var(&self, name: &str) -> Option<String>;
}
