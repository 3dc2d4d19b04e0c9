//! Typed classification of the gRPC formats along the encoding and transport axes.

#[cfg(test)]
mod tests;

use std::fmt::{Display, Formatter};

use nexus_rpc_format_core_rs::SerializationFormat;
use strum::{EnumIter, IntoEnumIterator};

use crate::grpc_serialization_formats::{is_grpc, is_grpc_web, is_json, is_proto, JSON, JSON_WEB, PROTO, PROTO_WEB};

/// Payload encoding of a gRPC format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum GrpcEncoding {
  /// Protocol Buffers binary encoding.
  Proto,
  /// JSON encoding.
  Json,
}

/// Transport framing of a gRPC format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum GrpcTransport {
  /// Native gRPC framing.
  Native,
  /// gRPC-Web framing, usable from browsers.
  Web,
}

/// A cell of the encoding/transport grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrpcFormatKind {
  encoding: GrpcEncoding,
  transport: GrpcTransport,
}

static_assertions::assert_impl_all!(GrpcFormatKind: Send, Sync, Copy);

impl GrpcFormatKind {
  /// Creates the cell for `encoding` and `transport`.
  #[must_use]
  pub const fn new(encoding: GrpcEncoding, transport: GrpcTransport) -> Self {
    Self { encoding, transport }
  }

  /// Returns the payload encoding.
  #[must_use]
  pub const fn encoding(&self) -> GrpcEncoding {
    self.encoding
  }

  /// Returns the transport framing.
  #[must_use]
  pub const fn transport(&self) -> GrpcTransport {
    self.transport
  }

  /// Returns the canonical format of this cell.
  #[must_use]
  pub fn format(&self) -> SerializationFormat {
    match (self.encoding, self.transport) {
      (GrpcEncoding::Proto, GrpcTransport::Native) => *PROTO,
      (GrpcEncoding::Json, GrpcTransport::Native) => *JSON,
      (GrpcEncoding::Proto, GrpcTransport::Web) => *PROTO_WEB,
      (GrpcEncoding::Json, GrpcTransport::Web) => *JSON_WEB,
    }
  }

  /// Iterates every cell in the order `gproto`, `gjson`, `gproto-web`, `gjson-web`.
  pub fn all() -> impl Iterator<Item = GrpcFormatKind> {
    GrpcTransport::iter()
      .flat_map(|transport| GrpcEncoding::iter().map(move |encoding| GrpcFormatKind::new(encoding, transport)))
  }
}

impl Display for GrpcFormatKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.format())
  }
}

/// Returns the encoding of a gRPC format, or `None` for any other format.
#[must_use]
pub fn encoding_of(format: &SerializationFormat) -> Option<GrpcEncoding> {
  if is_proto(format) {
    Some(GrpcEncoding::Proto)
  } else if is_json(format) {
    Some(GrpcEncoding::Json)
  } else {
    None
  }
}

/// Returns the transport of a gRPC format, or `None` for any other format.
#[must_use]
pub fn transport_of(format: &SerializationFormat) -> Option<GrpcTransport> {
  if is_grpc_web(format) {
    Some(GrpcTransport::Web)
  } else if is_grpc(format) {
    Some(GrpcTransport::Native)
  } else {
    None
  }
}

/// Places `format` in the encoding/transport grid. `None` means it is not a gRPC format.
#[must_use]
pub fn classify(format: &SerializationFormat) -> Option<GrpcFormatKind> {
  let encoding = encoding_of(format)?;
  let transport = transport_of(format)?;
  Some(GrpcFormatKind::new(encoding, transport))
}
