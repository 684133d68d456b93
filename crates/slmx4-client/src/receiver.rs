use std::io::{ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use slmx4_frame::{FrameError, FrameReader};
use slmx4_schema::{Response, WireCodec};
use tracing::{debug, trace, warn};

/// Body of the receive thread.
///
/// Reads frames for the lifetime of the connection and pushes every
/// decoded response (acks included) onto the queue in arrival order.
/// Single producer; no filtering, no reordering.
///
/// A `TimedOut` read is the poll tick of the serial driver: loop around,
/// checking the shutdown flag, with any partial frame still buffered in
/// the reader. Any other stream or decode failure is the end of the
/// session. The protocol has no resync marker, so after a malformed
/// frame the stream position is unknowable; the loop exits and the
/// dropped queue sender wakes any blocked dispatcher call with
/// `Disconnected`.
pub(crate) fn run<R: Read>(
    mut reader: FrameReader<R>,
    codec: Arc<dyn WireCodec>,
    queue: mpsc::Sender<Response>,
    shutdown: Arc<AtomicBool>,
) {
    debug!("receive loop started");
    loop {
        if shutdown.load(Ordering::Relaxed) {
            debug!("receive loop shutting down");
            return;
        }

        let payload = match reader.read_frame() {
            Ok(payload) => payload,
            Err(FrameError::Io(err)) if err.kind() == ErrorKind::TimedOut => continue,
            Err(err) => {
                warn!(error = %err, "receive loop terminated by stream error");
                return;
            }
        };

        let response = match codec.decode_response(payload.as_ref()) {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "receive loop terminated by decode error");
                return;
            }
        };

        trace!(opcode = %response.opcode(), "queued response");
        if queue.send(response).is_err() {
            debug!("response queue dropped; receive loop exiting");
            return;
        }
    }
}
