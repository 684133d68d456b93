use crate::error::{Result, SchemaError};
use crate::opcode::Opcode;
use crate::wire::{AckInfo, HealthMsg, ServerResponse, Vector};

/// A decoded device response, keyed by opcode.
///
/// The firmware's envelope carries one payload field per opcode; this
/// union makes the pairing unrepresentable-if-wrong. Every response the
/// device emits maps to exactly one variant:
///
/// - `ACK` → [`Response::Ack`]
/// - `HEALTH_MSG` → [`Response::Health`]
/// - `ONE_SHOT` → [`Response::Wave`] (the respiration waveform)
/// - `VERSION` → [`Response::Version`] (comma-delimited text)
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The device accepted the command with the given opcode.
    Ack { acked: Opcode },
    /// One health-status record.
    Health(HealthMsg),
    /// The respiration waveform for a measurement.
    Wave(Vector),
    /// Firmware version text, `name,version,protocol`.
    Version(String),
}

impl Response {
    /// The wire opcode this response arrived under.
    pub fn opcode(&self) -> Opcode {
        match self {
            Response::Ack { .. } => Opcode::Ack,
            Response::Health(_) => Opcode::HealthMsg,
            Response::Wave(_) => Opcode::OneShot,
            Response::Version(_) => Opcode::Version,
        }
    }

    /// Check a decoded envelope against the schema and lift it into the
    /// typed union.
    ///
    /// `START`/`STOP` never arrive as top-level opcodes (they only show
    /// up inside acks); seeing one is a schema violation, as is an
    /// envelope whose tagged payload field is absent.
    pub fn from_wire(wire: ServerResponse) -> Result<Self> {
        let opcode = Opcode::try_from(wire.opcode)
            .map_err(|_| SchemaError::UnknownOpcode(wire.opcode))?;

        match opcode {
            Opcode::Ack => {
                let ack = wire
                    .ack
                    .ok_or(SchemaError::MissingPayload { opcode })?;
                let acked = Opcode::try_from(ack.opcode)
                    .map_err(|_| SchemaError::UnknownOpcode(ack.opcode))?;
                Ok(Response::Ack { acked })
            }
            Opcode::HealthMsg => wire
                .health
                .map(Response::Health)
                .ok_or(SchemaError::MissingPayload { opcode }),
            Opcode::OneShot => wire
                .vector
                .map(Response::Wave)
                .ok_or(SchemaError::MissingPayload { opcode }),
            Opcode::Version => Ok(Response::Version(wire.text)),
            Opcode::Start | Opcode::Stop => Err(SchemaError::UnexpectedOpcode(opcode)),
        }
    }

    /// Lower the typed union back into a wire envelope.
    ///
    /// The device side of the conversation; used by test doubles.
    pub fn into_wire(self) -> ServerResponse {
        match self {
            Response::Ack { acked } => ServerResponse {
                opcode: Opcode::Ack as i32,
                ack: Some(AckInfo {
                    opcode: acked as i32,
                }),
                ..Default::default()
            },
            Response::Health(health) => ServerResponse {
                opcode: Opcode::HealthMsg as i32,
                health: Some(health),
                ..Default::default()
            },
            Response::Wave(vector) => ServerResponse {
                opcode: Opcode::OneShot as i32,
                vector: Some(vector),
                ..Default::default()
            },
            Response::Version(text) => ServerResponse {
                opcode: Opcode::Version as i32,
                text,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_maps_to_ack_variant() {
        let wire = Response::Ack {
            acked: Opcode::Start,
        }
        .into_wire();
        let response = Response::from_wire(wire).unwrap();
        assert_eq!(
            response,
            Response::Ack {
                acked: Opcode::Start
            }
        );
        assert_eq!(response.opcode(), Opcode::Ack);
    }

    #[test]
    fn health_maps_to_health_variant() {
        let health = HealthMsg {
            presence_detected: true,
            respiration_rpm: 14.5,
            debug: vec![42, 1],
            ..Default::default()
        };
        let wire = Response::Health(health.clone()).into_wire();
        let response = Response::from_wire(wire).unwrap();
        assert_eq!(response, Response::Health(health));
        assert_eq!(response.opcode(), Opcode::HealthMsg);
    }

    #[test]
    fn one_shot_maps_to_wave_variant() {
        let wave = Vector {
            len: 3,
            vec: vec![0.1, 0.2, 0.3],
        };
        let wire = Response::Wave(wave.clone()).into_wire();
        let response = Response::from_wire(wire).unwrap();
        assert_eq!(response, Response::Wave(wave));
        assert_eq!(response.opcode(), Opcode::OneShot);
    }

    #[test]
    fn version_keeps_text_verbatim() {
        let wire = Response::Version("SLM-X4,1.2.3,2".into()).into_wire();
        let response = Response::from_wire(wire).unwrap();
        assert_eq!(response, Response::Version("SLM-X4,1.2.3,2".into()));
    }

    #[test]
    fn ack_without_payload_is_rejected() {
        let wire = ServerResponse {
            opcode: Opcode::Ack as i32,
            ..Default::default()
        };
        let err = Response::from_wire(wire).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingPayload {
                opcode: Opcode::Ack
            }
        ));
    }

    #[test]
    fn health_without_payload_is_rejected() {
        let wire = ServerResponse {
            opcode: Opcode::HealthMsg as i32,
            ..Default::default()
        };
        let err = Response::from_wire(wire).unwrap_err();
        assert!(matches!(err, SchemaError::MissingPayload { .. }));
    }

    #[test]
    fn top_level_start_stop_are_rejected() {
        for opcode in [Opcode::Start, Opcode::Stop] {
            let wire = ServerResponse {
                opcode: opcode as i32,
                ..Default::default()
            };
            let err = Response::from_wire(wire).unwrap_err();
            assert!(matches!(err, SchemaError::UnexpectedOpcode(op) if op == opcode));
        }
    }

    #[test]
    fn unknown_opcode_is_rejected() {
        let wire = ServerResponse {
            opcode: 99,
            ..Default::default()
        };
        let err = Response::from_wire(wire).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownOpcode(99)));
    }
}
