use std::path::Path;
use std::sync::Arc;

use slmx4_frame::{FrameReader, FrameWriter};
use slmx4_schema::{VcomCodec, WireCodec};
use slmx4_transport::{LinkConfig, SerialLink};

use crate::client::HealthClient;
use crate::error::Result;

/// Open the serial device and return a connected client.
///
/// Stale input is flushed on open, the link is split into a read and a
/// write endpoint, and the receive thread starts immediately.
pub fn connect(path: impl AsRef<Path>) -> Result<HealthClient> {
    connect_with_config(path, &LinkConfig::default(), Arc::new(VcomCodec))
}

/// Connect with explicit link configuration and codec.
pub fn connect_with_config(
    path: impl AsRef<Path>,
    config: &LinkConfig,
    codec: Arc<dyn WireCodec>,
) -> Result<HealthClient> {
    let link = SerialLink::open(path, config)?;
    let reader_link = link.try_clone()?;

    let reader = FrameReader::new(reader_link);
    let writer = FrameWriter::new(link);

    Ok(HealthClient::from_parts(reader, writer, codec))
}
