/// Errors that can occur in protocol client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level error (device unreachable, driver failure).
    #[error("transport error: {0}")]
    Transport(#[from] slmx4_transport::TransportError),

    /// Frame-level error on the outgoing path.
    #[error("frame error: {0}")]
    Frame(#[from] slmx4_frame::FrameError),

    /// Schema-level error on the outgoing path.
    #[error("schema error: {0}")]
    Schema(#[from] slmx4_schema::SchemaError),

    /// The receive loop has terminated (stream error, decode error, or
    /// disconnect) and the queued responses are exhausted. No further
    /// messages will ever arrive on this connection; reconnect to
    /// continue.
    #[error("connection closed: receive loop terminated")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, ClientError>;
