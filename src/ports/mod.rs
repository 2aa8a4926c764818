// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The loader depends on two collaborators: something that opens files for
//! line-by-line reading, and something that looks up environment variables.
//! Both are traits here and implemented by adapters in the adapters layer.

pub mod environment;
pub mod reader;

// Re-export commonly used types
pub use environment::Environment;
pub use reader::SourceReader;
