//! Length-prefixed message framing for the SLM-X4 USB VCOM protocol.
//!
//! Every message in either direction is framed as:
//! - A 4-byte little-endian payload length
//! - The payload bytes themselves
//!
//! There is no magic number and no resynchronization marker; the frame
//! boundary is derived purely from the length prefix. No partial reads,
//! no buffer management in user code.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_frame, encode_frame, FrameConfig, DEFAULT_MAX_PAYLOAD, LEN_PREFIX_SIZE};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;
