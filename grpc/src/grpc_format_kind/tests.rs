use super::*;

#[test]
fn all_yields_the_grid_in_canonical_order() {
  let formats = GrpcFormatKind::all().map(|kind| kind.format()).collect::<Vec<_>>();

  assert_eq!(formats, [*PROTO, *JSON, *PROTO_WEB, *JSON_WEB]);
}

#[test]
fn classify_inverts_format() {
  for kind in GrpcFormatKind::all() {
    assert_eq!(classify(&kind.format()), Some(kind));
  }
}

#[test]
fn classify_agrees_with_predicates() {
  for kind in GrpcFormatKind::all() {
    let format = kind.format();
    assert_eq!(kind.encoding() == GrpcEncoding::Proto, is_proto(&format));
    assert_eq!(kind.encoding() == GrpcEncoding::Json, is_json(&format));
    assert_eq!(kind.transport() == GrpcTransport::Web, is_grpc_web(&format));
  }
}

#[test]
fn other_formats_have_no_kind() {
  let other = SerializationFormat::of("kind-test-other").expect("intern");

  assert_eq!(classify(&other), None);
  assert_eq!(encoding_of(&other), None);
  assert_eq!(transport_of(&other), None);
  assert_eq!(classify(&SerializationFormat::none()), None);
}

#[test]
fn display_uses_axis_and_format_names() {
  let kind = GrpcFormatKind::new(GrpcEncoding::Json, GrpcTransport::Web);

  assert_eq!(kind.to_string(), "gjson-web");
  assert_eq!(GrpcEncoding::Proto.to_string(), "proto");
  assert_eq!(GrpcTransport::Native.to_string(), "native");
}

#[test]
fn accessors_return_the_constructed_axes() {
  for kind in GrpcFormatKind::all() {
    let rebuilt = GrpcFormatKind::new(kind.encoding(), kind.transport());
    assert_eq!(rebuilt, kind);
  }

  let kind = GrpcFormatKind::new(GrpcEncoding::Proto, GrpcTransport::Native);
  assert_eq!(kind.encoding(), GrpcEncoding::Proto);
  assert_eq!(kind.transport(), GrpcTransport::Native);
  assert_eq!(GrpcFormatKind::all().count(), 4);
}
