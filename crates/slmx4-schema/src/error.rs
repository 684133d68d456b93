use crate::opcode::Opcode;

/// Errors that can occur while decoding protocol messages.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The payload is not valid protobuf for the expected schema.
    #[error("malformed message payload: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The opcode integer is outside the closed protocol set.
    #[error("unknown opcode {0}")]
    UnknownOpcode(i32),

    /// The response opcode promises a payload variant that is absent.
    #[error("{opcode} response is missing its payload")]
    MissingPayload { opcode: Opcode },

    /// The firmware never sends this opcode at the top level.
    #[error("unexpected top-level opcode {0}")]
    UnexpectedOpcode(Opcode),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
