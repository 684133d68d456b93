//! Blocking protocol client for the SLM-X4 Health firmware.
//!
//! This is the "just works" layer. Open the serial link, issue
//! commands, get typed responses back:
//!
//! ```no_run
//! use slmx4_client::connect;
//!
//! # fn main() -> Result<(), slmx4_client::ClientError> {
//! let mut slmx4 = connect("/dev/ttyACM0")?;
//! let version = slmx4.get_version()?;
//! let (health, wave) = slmx4.one_shot()?;
//! slmx4.disconnect();
//! # Ok(())
//! # }
//! ```
//!
//! Per connection there are exactly two schedulable units: the caller's
//! thread driving [`HealthClient`], and a receive thread that decodes
//! every incoming frame onto a FIFO queue. All client calls are
//! blocking; there are no timeouts on queue waits.

pub mod client;
pub mod connector;
pub mod error;

mod receiver;

pub use client::{HealthClient, VersionInfo};
pub use connector::{connect, connect_with_config};
pub use error::{ClientError, Result};
