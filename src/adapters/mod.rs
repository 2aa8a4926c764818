// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! File readers implement [`SourceReader`](crate::ports::SourceReader) and
//! environment lookups implement [`Environment`](crate::ports::Environment).

pub mod env_var;
pub mod fs_reader;
pub mod in_memory;

pub use env_var::{ProcessEnv, StaticEnv};
pub use fs_reader::FsReader;
pub use in_memory::InMemoryReader;
