//! Raw protobuf messages, field-for-field as the firmware defines them.
//!
//! Tags and types mirror `slmx4_usb_vcom.proto`; the structs are
//! annotated by hand so no protoc step is needed.

use crate::opcode::Opcode;

/// Host → device command. The opcode is the entire request.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct ClientCommand {
    #[prost(enumeration = "Opcode", tag = "1")]
    pub opcode: i32,
}

impl ClientCommand {
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode: opcode as i32,
        }
    }
}

/// Acknowledgement payload: which command the device accepted.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct AckInfo {
    #[prost(enumeration = "Opcode", tag = "1")]
    pub opcode: i32,
}

/// One health-status record.
///
/// `debug` carries two unsigned counters: frame count and minutes of
/// uptime.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthMsg {
    #[prost(bool, tag = "1")]
    pub presence_detected: bool,
    #[prost(bool, tag = "2")]
    pub respiration_detected: bool,
    #[prost(bool, tag = "3")]
    pub movement_detected: bool,
    #[prost(uint32, tag = "4")]
    pub movement_type: u32,
    #[prost(float, tag = "5")]
    pub distance: f32,
    #[prost(float, tag = "6")]
    pub distance_conf: f32,
    #[prost(float, tag = "7")]
    pub respiration_rpm: f32,
    #[prost(float, tag = "8")]
    pub respiration_conf: f32,
    #[prost(float, tag = "9")]
    pub rms: f32,
    #[prost(float, tag = "10")]
    pub temperature: f32,
    #[prost(float, tag = "11")]
    pub humidity: f32,
    #[prost(float, tag = "12")]
    pub lux: f32,
    #[prost(uint32, repeated, tag = "13")]
    pub debug: Vec<u32>,
}

impl HealthMsg {
    /// Radar frame counter from the debug block, when present.
    pub fn frame_count(&self) -> Option<u32> {
        self.debug.first().copied()
    }

    /// Minutes of firmware uptime from the debug block, when present.
    pub fn minutes(&self) -> Option<u32> {
        self.debug.get(1).copied()
    }
}

/// A float vector; the Health firmware uses it for the respiration
/// waveform.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vector {
    #[prost(uint32, tag = "1")]
    pub len: u32,
    #[prost(float, repeated, tag = "2")]
    pub vec: Vec<f32>,
}

/// Device → host response envelope.
///
/// Exactly one of the payload fields is meaningful, selected by
/// `opcode`; [`crate::Response`] is the checked view of this struct.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerResponse {
    #[prost(enumeration = "Opcode", tag = "1")]
    pub opcode: i32,
    #[prost(message, optional, tag = "2")]
    pub ack: Option<AckInfo>,
    #[prost(message, optional, tag = "3")]
    pub health: Option<HealthMsg>,
    #[prost(message, optional, tag = "4")]
    pub vector: Option<Vector>,
    #[prost(string, tag = "5")]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;

    #[test]
    fn command_encodes_and_decodes() {
        let cmd = ClientCommand::new(Opcode::OneShot);
        let bytes = cmd.encode_to_vec();
        let back = ClientCommand::decode(bytes.as_slice()).unwrap();
        assert_eq!(back.opcode, Opcode::OneShot as i32);
    }

    #[test]
    fn version_command_is_the_empty_message() {
        // Opcode::Version is the zero value, so proto3 elides it.
        let cmd = ClientCommand::new(Opcode::Version);
        assert!(cmd.encode_to_vec().is_empty());
        let back = ClientCommand::decode(&[][..]).unwrap();
        assert_eq!(back.opcode, Opcode::Version as i32);
    }

    #[test]
    fn health_debug_accessors() {
        let health = HealthMsg {
            debug: vec![1200, 2],
            ..Default::default()
        };
        assert_eq!(health.frame_count(), Some(1200));
        assert_eq!(health.minutes(), Some(2));

        let empty = HealthMsg::default();
        assert_eq!(empty.frame_count(), None);
        assert_eq!(empty.minutes(), None);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = ServerResponse::decode(&[0xFF, 0xFF, 0xFF][..]);
        assert!(err.is_err());
    }
}
