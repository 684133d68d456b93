use prost::Message;

use crate::error::Result;
use crate::opcode::Opcode;
use crate::response::Response;
use crate::wire::{ClientCommand, ServerResponse};

/// Serialize/deserialize boundary between frame payloads and typed
/// messages.
///
/// The protocol client takes a codec value at construction instead of
/// reaching for a global schema, so tests can substitute a double.
pub trait WireCodec: Send + Sync {
    /// Serialize a command for the given opcode.
    fn encode_command(&self, opcode: Opcode) -> Vec<u8>;

    /// Deserialize one response payload.
    fn decode_response(&self, payload: &[u8]) -> Result<Response>;
}

/// The production codec: protobuf per the firmware's USB VCOM schema.
#[derive(Debug, Default, Clone, Copy)]
pub struct VcomCodec;

impl WireCodec for VcomCodec {
    fn encode_command(&self, opcode: Opcode) -> Vec<u8> {
        ClientCommand::new(opcode).encode_to_vec()
    }

    fn decode_response(&self, payload: &[u8]) -> Result<Response> {
        let wire = ServerResponse::decode(payload)?;
        Response::from_wire(wire)
    }
}
