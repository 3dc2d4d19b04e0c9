//! The gRPC [`SerializationFormat`]s and their classification predicates.


use nexus_rpc_format_core_rs::{require_format, FormatError, FormatSet, SerializationFormat};
use once_cell::sync::Lazy;

use crate::grpc_format_kind::{classify, GrpcFormatKind};

/// gRPC protobuf serialization format.
pub static PROTO: Lazy<SerializationFormat> = Lazy::new(|| SerializationFormat::from_static("gproto"));

/// gRPC JSON serialization format.
pub static JSON: Lazy<SerializationFormat> = Lazy::new(|| SerializationFormat::from_static("gjson"));

/// gRPC-Web protobuf serialization format.
pub static PROTO_WEB: Lazy<SerializationFormat> = Lazy::new(|| SerializationFormat::from_static("gproto-web"));

/// gRPC-Web JSON serialization format.
pub static JSON_WEB: Lazy<SerializationFormat> = Lazy::new(|| SerializationFormat::from_static("gjson-web"));

static GRPC_FORMATS: Lazy<FormatSet> = Lazy::new(|| FormatSet::of([*PROTO, *JSON, *PROTO_WEB, *JSON_WEB]));

/// Returns the set of all known gRPC serialization formats.
#[must_use]
pub fn values() -> &'static FormatSet {
  &GRPC_FORMATS
}

/// Returns whether `format` is one of the gRPC formats.
#[must_use]
pub fn is_grpc(format: &SerializationFormat) -> bool {
  values().contains(format)
}

/// Returns whether `format` is a protobuf-based gRPC format.
#[must_use]
pub fn is_proto(format: &SerializationFormat) -> bool {
  *format == *PROTO || *format == *PROTO_WEB
}

/// Returns whether `format` is a JSON-based gRPC format.
#[must_use]
pub fn is_json(format: &SerializationFormat) -> bool {
  *format == *JSON || *format == *JSON_WEB
}

/// Returns whether `format` is gRPC-Web, the subset of gRPC that browsers can speak.
#[must_use]
pub fn is_grpc_web(format: &SerializationFormat) -> bool {
  *format == *PROTO_WEB || *format == *JSON_WEB
}

/// [`is_grpc`] for an argument that may be absent.
#[must_use = "the classification result should be checked"]
pub fn try_is_grpc(format: Option<&SerializationFormat>) -> Result<bool, FormatError> {
  require_format(format).map(is_grpc)
}

/// [`is_proto`] for an argument that may be absent.
#[must_use = "the classification result should be checked"]
pub fn try_is_proto(format: Option<&SerializationFormat>) -> Result<bool, FormatError> {
  require_format(format).map(is_proto)
}

/// [`is_json`] for an argument that may be absent.
#[must_use = "the classification result should be checked"]
pub fn try_is_json(format: Option<&SerializationFormat>) -> Result<bool, FormatError> {
  require_format(format).map(is_json)
}

/// [`is_grpc_web`] for an argument that may be absent.
#[must_use = "the classification result should be checked"]
pub fn try_is_grpc_web(format: Option<&SerializationFormat>) -> Result<bool, FormatError> {
  require_format(format).map(is_grpc_web)
}

/// Method syntax for the gRPC predicates.
pub trait GrpcSerializationFormatExt {
  /// See [`is_grpc`].
  fn is_grpc(&self) -> bool;
  /// See [`is_proto`].
  fn is_proto(&self) -> bool;
  /// See [`is_json`].
  fn is_json(&self) -> bool;
  /// See [`is_grpc_web`].
  fn is_grpc_web(&self) -> bool;
  /// See [`classify`].
  fn grpc_kind(&self) -> Option<GrpcFormatKind>;
}

impl GrpcSerializationFormatExt for SerializationFormat {
  fn is_grpc(&self) -> bool {
    is_grpc(self)
  }

  fn is_proto(&self) -> bool {
    is_proto(self)
  }

  fn is_json(&self) -> bool {
    is_json(self)
  }

  fn is_grpc_web(&self) -> bool {
    is_grpc_web(self)
  }

  fn grpc_kind(&self) -> Option<GrpcFormatKind> {
    classify(self)
  }
}
