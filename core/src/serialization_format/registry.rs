use std::borrow::Cow;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::format_error::FormatError;

/// Interned storage behind a `SerializationFormat` handle.
#[derive(Debug)]
pub struct FormatEntry {
  name: &'static str,
}

impl FormatEntry {
  const fn new(name: &'static str) -> Self {
    Self { name }
  }

  pub(crate) fn name(&self) -> &'static str {
    self.name
  }
}

pub(crate) static NONE_ENTRY: FormatEntry = FormatEntry::new("none");
pub(crate) static UNKNOWN_ENTRY: FormatEntry = FormatEntry::new("unknown");

static FORMATS: Lazy<DashMap<String, &'static FormatEntry>> = Lazy::new(|| {
  let formats = DashMap::new();
  for entry in [&NONE_ENTRY, &UNKNOWN_ENTRY] {
    formats.insert(entry.name.to_string(), entry);
  }
  formats
});

trait DashMapExtension<K, V> {
  fn load_or_store_with<F>(&self, key: K, f: F) -> (V, bool)
  where
    F: FnOnce(&K) -> V;
}

impl<K: Eq + std::hash::Hash, V: Clone> DashMapExtension<K, V> for DashMap<K, V> {
  fn load_or_store_with<F>(&self, key: K, f: F) -> (V, bool)
  where
    F: FnOnce(&K) -> V, {
    match self.entry(key) {
      Entry::Occupied(entry) => (entry.get().clone(), true),
      Entry::Vacant(entry) => {
        let value = f(entry.key());
        (entry.insert(value).clone(), false)
      }
    }
  }
}

/// Validates `name` and lowercases it. Borrows when the name is already canonical.
pub(crate) fn canonicalize(name: &str) -> Result<Cow<'_, str>, FormatError> {
  if name.is_empty() {
    return Err(FormatError::invalid_name(name, "name is empty"));
  }
  if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
    return Err(FormatError::invalid_name(
      name,
      "name contains whitespace or control characters",
    ));
  }
  if name.bytes().any(|b| b.is_ascii_uppercase()) {
    Ok(Cow::Owned(name.to_ascii_lowercase()))
  } else {
    Ok(Cow::Borrowed(name))
  }
}

pub(crate) fn lookup(canonical: &str) -> Option<&'static FormatEntry> {
  FORMATS.get(canonical).map(|entry| *entry.value())
}

/// Returns the entry for `canonical`, creating it on first use.
pub(crate) fn intern(canonical: Cow<'_, str>) -> &'static FormatEntry {
  if let Some(entry) = lookup(&canonical) {
    tracing::trace!("intern: reusing serialization format = {}", entry.name);
    return entry;
  }
  let (entry, existed) = FORMATS.load_or_store_with(canonical.into_owned(), |name| {
    let name: &'static str = Box::leak(name.clone().into_boxed_str());
    let entry: &'static FormatEntry = Box::leak(Box::new(FormatEntry::new(name)));
    entry
  });
  if existed {
    tracing::trace!("intern: reusing serialization format = {}", entry.name);
  } else {
    tracing::debug!("intern: registered serialization format = {}", entry.name);
  }
  entry
}

pub(crate) fn entries() -> Vec<&'static FormatEntry> {
  FORMATS.iter().map(|entry| *entry.value()).collect()
}
