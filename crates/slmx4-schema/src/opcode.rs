//! Protocol opcodes.
//!
//! A single closed set identifies both outgoing command intent and
//! incoming message kind. The numeric values are fixed by the
//! firmware's USB VCOM schema.

use std::fmt;

/// Command/response discriminator for the USB VCOM protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Opcode {
    /// Request (or carry) firmware version text.
    Version = 0,
    /// Trigger a single measurement; also tags the waveform response.
    OneShot = 1,
    /// Enter streaming mode.
    Start = 2,
    /// Leave streaming mode.
    Stop = 3,
    /// Acknowledgement of a received command.
    Ack = 4,
    /// Health-status record.
    HealthMsg = 5,
}

impl Opcode {
    /// Wire name of the opcode, as the firmware documentation spells it.
    pub fn name(self) -> &'static str {
        match self {
            Opcode::Version => "VERSION",
            Opcode::OneShot => "ONE_SHOT",
            Opcode::Start => "START",
            Opcode::Stop => "STOP",
            Opcode::Ack => "ACK",
            Opcode::HealthMsg => "HEALTH_MSG",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
