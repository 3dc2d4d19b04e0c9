//! Interned [`SerializationFormat`] identifiers.

mod registry;

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::format_error::FormatError;
use crate::format_set::FormatSet;

use registry::FormatEntry;

/// Identifier of a wire encoding, compared by identity.
///
/// Handles are obtained through [`SerializationFormat::of`]. Two handles are equal iff they were
/// interned from the same canonical name, which makes equality a single pointer comparison.
#[derive(Clone, Copy)]
pub struct SerializationFormat {
  entry: &'static FormatEntry,
}

static_assertions::assert_impl_all!(SerializationFormat: Send, Sync, Copy);

impl SerializationFormat {
  /// No serialization format. Used by services that do not carry a payload encoding.
  #[inline]
  #[must_use]
  pub fn none() -> Self {
    Self::from_entry(&registry::NONE_ENTRY)
  }

  /// A format that could not be determined.
  #[inline]
  #[must_use]
  pub fn unknown() -> Self {
    Self::from_entry(&registry::UNKNOWN_ENTRY)
  }

  /// Interns `name` and returns its canonical handle.
  ///
  /// Names are canonicalized by ASCII-lowercasing, so `"GPROTO"` and `"gproto"` resolve to the
  /// same handle. Empty names and names containing whitespace or control characters are rejected.
  ///
  /// Entries are never released. Every distinct name interned here stays allocated for the rest
  /// of the process, so names taken from untrusted input should go through
  /// [`SerializationFormat::find`] instead.
  pub fn of(name: &str) -> Result<Self, FormatError> {
    let canonical = registry::canonicalize(name)?;
    Ok(Self::from_entry(registry::intern(canonical)))
  }

  /// Interns a name known at compile time.
  ///
  /// # Panics
  ///
  /// Panics if `name` is not a valid format name. Use [`SerializationFormat::of`] for names
  /// that come from the wire or from configuration.
  #[must_use]
  pub fn from_static(name: &'static str) -> Self {
    match registry::canonicalize(name) {
      Ok(canonical) => Self::from_entry(registry::intern(canonical)),
      Err(err) => panic!("{err}"),
    }
  }

  /// Looks up an already interned format without registering a new one.
  #[must_use]
  pub fn find(name: &str) -> Option<Self> {
    let canonical = registry::canonicalize(name).ok()?;
    registry::lookup(&canonical).map(Self::from_entry)
  }

  /// Returns a snapshot of every format interned so far, ordered by name.
  #[must_use]
  pub fn values() -> FormatSet {
    let mut formats = registry::entries().into_iter().map(Self::from_entry).collect::<Vec<_>>();
    formats.sort_unstable();
    // Registry keys are unique canonical names.
    FormatSet::from_unique(formats)
  }

  pub(crate) const fn from_entry(entry: &'static FormatEntry) -> Self {
    Self { entry }
  }

  /// Returns the canonical name.
  #[inline]
  #[must_use]
  pub fn name(&self) -> &'static str {
    self.entry.name()
  }

  /// Alias of [`SerializationFormat::name`].
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &'static str {
    self.name()
  }

  /// Returns `true` if both handles refer to the same interned entry.
  #[inline]
  #[must_use]
  pub fn ptr_eq(a: &Self, b: &Self) -> bool {
    std::ptr::eq(a.entry, b.entry)
  }

  /// Returns `true` for [`SerializationFormat::none`].
  #[inline]
  #[must_use]
  pub fn is_none(&self) -> bool {
    std::ptr::eq(self.entry, &registry::NONE_ENTRY)
  }

  /// Returns `true` for [`SerializationFormat::unknown`].
  #[inline]
  #[must_use]
  pub fn is_unknown(&self) -> bool {
    std::ptr::eq(self.entry, &registry::UNKNOWN_ENTRY)
  }
}

/// Unwraps an optional format argument, failing with [`FormatError::InvalidArgument`] when absent.
pub fn require_format(format: Option<&SerializationFormat>) -> Result<&SerializationFormat, FormatError> {
  format.ok_or(FormatError::invalid_argument("format"))
}

impl PartialEq for SerializationFormat {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    Self::ptr_eq(self, other)
  }
}

impl Eq for SerializationFormat {}

impl Hash for SerializationFormat {
  fn hash<H: Hasher>(&self, state: &mut H) {
    std::ptr::hash(self.entry, state);
  }
}

// Names are unique per entry, so ordering by name agrees with identity equality.
impl PartialOrd for SerializationFormat {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for SerializationFormat {
  fn cmp(&self, other: &Self) -> Ordering {
    self.name().cmp(other.name())
  }
}

impl Debug for SerializationFormat {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("SerializationFormat").field(&self.name()).finish()
  }
}

impl Display for SerializationFormat {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

/// Interns through [`SerializationFormat::of`], so every distinct name parsed stays allocated.
impl FromStr for SerializationFormat {
  type Err = FormatError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::of(s)
  }
}

impl AsRef<str> for SerializationFormat {
  fn as_ref(&self) -> &str {
    self.name()
  }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SerializationFormat {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer, {
    serializer.serialize_str(self.name())
  }
}

/// Interns through [`SerializationFormat::of`]. Every distinct name read stays allocated for the
/// rest of the process; use [`known`] for payloads from untrusted peers.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SerializationFormat {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>, {
    let name = <String as serde::Deserialize>::deserialize(deserializer)?;
    Self::of(&name).map_err(serde::de::Error::custom)
  }
}

/// Serde adapter that only accepts formats which are already interned.
///
/// Use with `#[serde(with = "nexus_rpc_format_core_rs::serialization_format::known")]` on fields
/// read from untrusted input. Unknown names are rejected instead of being registered.
#[cfg(feature = "serde")]
pub mod known {
  use super::SerializationFormat;

  /// Writes the canonical name.
  pub fn serialize<S>(format: &SerializationFormat, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer, {
    serializer.serialize_str(format.name())
  }

  /// Resolves the name with [`SerializationFormat::find`], failing for names never interned.
  pub fn deserialize<'de, D>(deserializer: D) -> Result<SerializationFormat, D::Error>
  where
    D: serde::Deserializer<'de>, {
    let name = <String as serde::Deserialize>::deserialize(deserializer)?;
    SerializationFormat::find(&name)
      .ok_or_else(|| serde::de::Error::custom(format!("unknown serialization format: {name}")))
  }
}
