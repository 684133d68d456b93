use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serialport::{ClearBuffer, SerialPort, SerialPortInfo};
use tracing::{debug, info};

use crate::error::{Result, TransportError};

/// Configuration for opening a [`SerialLink`].
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Baud rate requested from the driver. The SLM-X4 enumerates as
    /// USB CDC-ACM, which ignores the line rate, but the driver still
    /// requires one.
    pub baud_rate: u32,
    /// Driver-level read timeout. A read that sees no byte within this
    /// window returns `ErrorKind::TimedOut`; callers that want an
    /// indefinite blocking read retry on it.
    pub poll_timeout: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            poll_timeout: Duration::from_millis(200),
        }
    }
}

/// A connected serial link to the SLM-X4 — implements Read + Write.
///
/// Obtained from [`SerialLink::open`]. The handle can be duplicated
/// with [`SerialLink::try_clone`] so that a dedicated reader thread and
/// a writer each own an endpoint onto the same device; the device is
/// released once every handle is dropped.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
    path: PathBuf,
}

impl SerialLink {
    /// Open the serial device at `path` and discard any input the OS
    /// buffered before the open.
    ///
    /// Open failure is terminal: the caller reports it, it is never
    /// retried here.
    pub fn open(path: impl AsRef<Path>, config: &LinkConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let port = serialport::new(path.to_string_lossy(), config.baud_rate)
            .timeout(config.poll_timeout)
            .open()
            .map_err(|source| TransportError::Connect {
                path: path.clone(),
                source,
            })?;

        // Bytes the firmware emitted before we were listening belong to
        // no request; drop them so the first decoded frame is a reply
        // to something we sent.
        port.clear(ClearBuffer::Input)?;

        info!(?path, "opened serial link");
        Ok(Self { port, path })
    }

    /// Duplicate the handle (new descriptor onto the same device).
    pub fn try_clone(&self) -> Result<Self> {
        let port = self.port.try_clone()?;
        debug!(path = ?self.path, "cloned serial link handle");
        Ok(Self {
            port,
            path: self.path.clone(),
        })
    }

    /// The device path this link was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Transport name for diagnostics.
    pub fn transport_name(&self) -> &'static str {
        "usb-vcom-serial"
    }
}

impl Read for SerialLink {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.port.read(buf)
    }
}

impl Write for SerialLink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.port.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.port.flush()
    }
}

impl std::fmt::Debug for SerialLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLink")
            .field("path", &self.path)
            .finish()
    }
}

/// Enumerate serial devices visible to the host.
///
/// Diagnostic helper for "which port is the sensor on"; the SLM-X4
/// shows up as a USB port with Sensor Logic's vendor ID.
pub fn available_ports() -> Result<Vec<SerialPortInfo>> {
    Ok(serialport::available_ports()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LinkConfig::default();
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.poll_timeout, Duration::from_millis(200));
    }

    #[test]
    fn open_missing_device_fails_with_connect() {
        let result = SerialLink::open("/dev/does-not-exist-slmx4", &LinkConfig::default());
        assert!(matches!(result, Err(TransportError::Connect { .. })));
    }
}
