//! # StitchGrid Core
//!
//! Core types and utilities shared by the StitchGrid crates.
//! Provides the error taxonomy used at fallible boundaries (configuration,
//! document ingestion, artifact serialization) and the shared-handle aliases
//! used when an editor is embedded in a multi-threaded host.

pub mod error;
pub mod types;

pub use error::{ConfigError, Error, GeometryError, GridError, Result};

pub use types::{thread_safe, ThreadSafe};
