//! Message schema and codec for the SLM-X4 USB VCOM protocol.
//!
//! The Health firmware speaks protobuf inside length-prefixed frames.
//! The message structs here are hand-annotated `prost` types matching
//! the firmware's `.proto`; nothing is generated at build time.
//!
//! Two layers:
//! - [`wire`] — the raw protobuf structs exactly as they appear on the
//!   byte stream.
//! - [`Response`] — a tagged union keyed by [`Opcode`], so an illegal
//!   opcode/payload combination cannot be represented once decoding
//!   has succeeded.
//!
//! The [`WireCodec`] trait is the seam the protocol client is built
//! against; [`VcomCodec`] is the production implementation.

pub mod codec;
pub mod error;
pub mod opcode;
pub mod response;
pub mod wire;

pub use codec::{VcomCodec, WireCodec};
pub use error::{Result, SchemaError};
pub use opcode::Opcode;
pub use response::Response;
pub use wire::{AckInfo, ClientCommand, HealthMsg, ServerResponse, Vector};
