use std::path::PathBuf;

/// Errors that can occur on the serial transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the serial device. Fatal; never retried.
    #[error("failed to open {path}: {source}")]
    Connect {
        path: PathBuf,
        source: serialport::Error,
    },

    /// An operation on an established link failed at the driver level.
    #[error("serial device error: {0}")]
    Serial(#[from] serialport::Error),

    /// An I/O error occurred on the byte stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
