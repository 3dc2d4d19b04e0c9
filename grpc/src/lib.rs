#![deny(missing_docs)]

//! gRPC serialization formats for Nexus RPC.
//!
//! Four formats are known: [`PROTO`], [`JSON`], [`PROTO_WEB`] and [`JSON_WEB`]. The predicates in
//! this crate classify any [`SerializationFormat`] against them by identity, so they are total
//! and allocation-free: formats defined elsewhere simply classify as `false`.

pub mod grpc_format_kind;
pub mod grpc_serialization_formats;

pub use grpc_format_kind::{classify, encoding_of, transport_of, GrpcEncoding, GrpcFormatKind, GrpcTransport};
pub use grpc_serialization_formats::{
  is_grpc, is_grpc_web, is_json, is_proto, try_is_grpc, try_is_grpc_web, try_is_json, try_is_proto, values,
  GrpcSerializationFormatExt, JSON, JSON_WEB, PROTO, PROTO_WEB,
};

pub use nexus_rpc_format_core_rs::{FormatError, FormatSet, SerializationFormat};
