//! Error types reported by the format registry.

use thiserror::Error;

/// Errors raised while interning or checking serialization formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
  /// A required format argument was absent.
  #[error("{argument} must not be absent")]
  InvalidArgument {
    /// Name of the missing argument.
    argument: &'static str,
  },
  /// The name cannot be used as a canonical format name.
  #[error("invalid serialization format name {name:?}: {reason}")]
  InvalidName {
    /// The rejected name as supplied by the caller.
    name: String,
    /// Short description of the violated rule.
    reason: &'static str,
  },
}

impl FormatError {
  /// Creates a [`FormatError::InvalidArgument`] for the given argument name.
  #[must_use]
  pub const fn invalid_argument(argument: &'static str) -> Self {
    FormatError::InvalidArgument { argument }
  }

  /// Creates a [`FormatError::InvalidName`] for the given name.
  #[must_use]
  pub fn invalid_name(name: impl Into<String>, reason: &'static str) -> Self {
    FormatError::InvalidName {
      name: name.into(),
      reason,
    }
  }
}
