//! Immutable set of serialization formats with identity membership.

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt::{Debug, Formatter};

use crate::serialization_format::SerializationFormat;

/// Insertion-ordered, duplicate-free collection of [`SerializationFormat`]s.
///
/// The set exposes no mutating operation, so a shared `&FormatSet` is a read-only view.
#[derive(Clone, Default)]
pub struct FormatSet {
  formats: Box<[SerializationFormat]>,
}

impl FormatSet {
  /// Builds a set from `formats`, keeping the first occurrence of each format.
  pub fn of<I>(formats: I) -> Self
  where
    I: IntoIterator<Item = SerializationFormat>, {
    let mut seen = HashSet::new();
    let unique = formats.into_iter().filter(|format| seen.insert(*format)).collect::<Vec<_>>();
    Self::from_unique(unique)
  }

  /// Wraps formats that are already known to be distinct.
  pub(crate) fn from_unique(formats: Vec<SerializationFormat>) -> Self {
    debug_assert_eq!(
      formats.iter().collect::<HashSet<_>>().len(),
      formats.len(),
      "duplicate formats"
    );
    Self {
      formats: formats.into_boxed_slice(),
    }
  }

  /// Returns `true` if `format` is a member, compared by identity.
  #[inline]
  #[must_use]
  pub fn contains(&self, format: &SerializationFormat) -> bool {
    self.formats.iter().any(|member| SerializationFormat::ptr_eq(member, format))
  }

  /// Returns the number of members.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.formats.len()
  }

  /// Returns `true` if the set has no members.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.formats.is_empty()
  }

  /// Iterates the members in insertion order.
  pub fn iter(&self) -> std::slice::Iter<'_, SerializationFormat> {
    self.formats.iter()
  }

  /// Returns the members as a slice in insertion order.
  #[must_use]
  pub fn as_slice(&self) -> &[SerializationFormat] {
    &self.formats
  }
}

impl PartialEq for FormatSet {
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len() && self.iter().all(|format| other.contains(format))
  }
}

impl Eq for FormatSet {}

impl Debug for FormatSet {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_set().entries(self.formats.iter()).finish()
  }
}

impl FromIterator<SerializationFormat> for FormatSet {
  fn from_iter<T: IntoIterator<Item = SerializationFormat>>(iter: T) -> Self {
    Self::of(iter)
  }
}

impl<'a> IntoIterator for &'a FormatSet {
  type IntoIter = std::slice::Iter<'a, SerializationFormat>;
  type Item = &'a SerializationFormat;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
