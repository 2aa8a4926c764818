// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! Keys, values, entries, the define table and include set threaded through a
//! load, and the error type. Nothing in here touches the file system or the
//! process environment.

pub mod config_key;
pub mod config_value;
pub mod define_table;
pub mod entry;
pub mod errors;
pub mod include_set;
pub mod stem;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use define_table::DefineTable;
pub use entry::Entry;
pub use errors::{ConfigError, Result};
pub use include_set::IncludeSet;
pub use stem::Stem;
