#![deny(missing_docs)]

//! Interned serialization format identifiers shared by the Nexus RPC crates.
//!
//! A [`SerializationFormat`] is a `Copy` handle to a process-lifetime entry. Interning the
//! same canonical name always yields the same entry, so equality is a pointer comparison.

pub mod format_error;
pub mod format_set;
pub mod serialization_format;

pub use format_error::FormatError;
pub use format_set::FormatSet;
pub use serialization_format::{require_format, SerializationFormat};
