// SPDX-License-Identifier: MIT OR Apache-2.0

//! A line-oriented hierarchical configuration loader.
//!
//! Config files are plain text, one `key value...` entry per line, with dotted
//! keys (`db.us.host`) forming namespaces by convention. On top of that the format
//! supports a handful of directives:
//!
//! ```text
//! #DEFINE <name> substitution text...
//! #ENV <name> ENV_VAR_NAME
//! #INCLUDE relative/or/absolute/path.cfg
//! key value tokens joined by space
//! key+= additional value tokens
//! # any other line starting with # is a comment
//! ```
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `Entry`, `DefineTable`,
//!   `IncludeSet`, errors)
//! - **Ports**: Trait definitions for the collaborators the loader consumes
//!   (`SourceReader`, `Environment`)
//! - **Adapters**: Implementations of the ports (file system, in-memory, process env)
//! - **Service**: The `Loader` and the read-only `ConfigStore` it builds
//!
//! # Feature Flags
//!
//! - `cli`: Build the `dotcfg` command-line tool (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dotcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = ConfigStore::load("config/app.cfg")?;
//!
//! let host = store.get(&["db", "us", "host"])?;
//! for region in store.sub_keys(&["db"]) {
//!     let db = store.descend(&["db", region.as_str()]);
//!     println!("{} -> {}", region, db.get(&["host"])?);
//! }
//! # let _ = host;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FsReader, InMemoryReader, ProcessEnv, StaticEnv};
    pub use crate::domain::{ConfigError, ConfigKey, ConfigValue, Entry, Result, Stem};
    pub use crate::ports::{Environment, SourceReader};
    pub use crate::service::{ConfigStore, Loader, LoaderBuilder};
}
