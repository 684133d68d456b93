//! Host-side tooling for the SLM-X4 radar health sensor.
//!
//! Talks to the Health firmware over its USB VCOM interface: trigger
//! measurements, stream health/waveform data, query version info.
//!
//! # Crate Structure
//!
//! - [`transport`] — Serial-link transport (open, split, flush-on-open)
//! - [`frame`] — Length-prefixed message framing
//! - [`schema`] — Protobuf message schema and codec
//! - [`client`] — Blocking protocol client (behind `client` feature)

/// Re-export transport types.
pub mod transport {
    pub use slmx4_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use slmx4_frame::*;
}

/// Re-export schema types.
pub mod schema {
    pub use slmx4_schema::*;
}

/// Re-export client types (requires `client` feature).
#[cfg(feature = "client")]
pub mod client {
    pub use slmx4_client::*;
}
