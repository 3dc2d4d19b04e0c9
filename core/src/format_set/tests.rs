use super::*;

fn format(name: &str) -> SerializationFormat {
  SerializationFormat::of(name).expect("intern")
}

#[test]
fn of_drops_duplicates_and_keeps_insertion_order() {
  let a = format("fs-test-a");
  let b = format("fs-test-b");
  let set = FormatSet::of([b, a, format("FS-TEST-B"), a]);

  assert_eq!(set.len(), 2);
  assert_eq!(set.as_slice(), &[b, a]);
}

#[test]
fn contains_compares_by_identity() {
  let a = format("fs-test-contains");
  let set = FormatSet::of([a]);

  assert!(set.contains(&format("fs-test-contains")));
  assert!(!set.contains(&format("fs-test-missing")));
  assert!(!set.contains(&SerializationFormat::none()));
}

#[test]
fn equality_ignores_order() {
  let a = format("fs-test-eq-a");
  let b = format("fs-test-eq-b");

  assert_eq!(FormatSet::of([a, b]), FormatSet::of([b, a]));
  assert_ne!(FormatSet::of([a]), FormatSet::of([a, b]));
}

#[test]
fn default_is_empty() {
  let set = FormatSet::default();

  assert!(set.is_empty());
  assert_eq!(set.len(), 0);
  assert_eq!(set.iter().count(), 0);
}

#[test]
fn collects_from_iterator_and_iterates_by_reference() {
  let names = ["fs-test-iter-a", "fs-test-iter-b", "fs-test-iter-c"];
  let set = names.iter().map(|name| format(name)).collect::<FormatSet>();

  let mut seen = Vec::new();
  for member in &set {
    seen.push(member.name());
  }
  assert_eq!(seen, names);
  assert_eq!(format!("{set:?}"), "{SerializationFormat(\"fs-test-iter-a\"), SerializationFormat(\"fs-test-iter-b\"), SerializationFormat(\"fs-test-iter-c\")}");
}

#[test]
fn of_deduplicates_large_inputs() {
  let formats = (0..2_000)
    .map(|i| format(&format!("fs-test-large-{i}")))
    .collect::<Vec<_>>();
  let set = formats.iter().chain(formats.iter()).copied().collect::<FormatSet>();

  assert_eq!(set.len(), formats.len());
  assert_eq!(set.as_slice(), formats.as_slice());
}
