// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: the loader that parses config files and the store it produces.

pub mod loader;
pub mod store;

// Re-export commonly used types
pub use loader::{Loader, LoaderBuilder};
pub use store::ConfigStore;
