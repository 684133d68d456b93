use std::fmt;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::JoinHandle;

use slmx4_frame::{FrameReader, FrameWriter};
use slmx4_schema::{HealthMsg, Opcode, Response, Vector, WireCodec};
use slmx4_transport::SerialLink;
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::receiver;

/// Firmware version info, split from the device's comma-delimited
/// version text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub firmware_name: String,
    pub firmware_version: String,
    pub protocol_version: String,
}

impl VersionInfo {
    /// Split version text on `,` into the ordered triple, verbatim.
    ///
    /// Fields are not trimmed and empty fields are preserved; absent
    /// fields come back empty.
    pub fn parse(text: &str) -> Self {
        let mut parts = text.split(',');
        Self {
            firmware_name: parts.next().unwrap_or("").to_string(),
            firmware_version: parts.next().unwrap_or("").to_string(),
            protocol_version: parts.next().unwrap_or("").to_string(),
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (protocol {})",
            self.firmware_name, self.firmware_version, self.protocol_version
        )
    }
}

/// Blocking command dispatcher for one SLM-X4 connection.
///
/// Commands go out through the frame writer; responses come back on the
/// FIFO queue fed by the receive thread. One caller at a time: the
/// dispatcher is `&mut self` throughout, and the queue-consuming calls
/// (`wait_for`, `next_message`) are not meaningful from concurrent
/// callers on a shared connection.
///
/// Dropping the client disconnects.
pub struct HealthClient<W: Write = SerialLink> {
    writer: FrameWriter<W>,
    queue: mpsc::Receiver<Response>,
    codec: Arc<dyn WireCodec>,
    shutdown: Arc<AtomicBool>,
    reader_thread: Option<JoinHandle<()>>,
}

impl<W: Write> HealthClient<W> {
    /// Assemble a client from an already-split link and spawn the
    /// receive thread.
    ///
    /// [`crate::connect`] does this for the serial transport; tests do
    /// it over socket pairs.
    pub fn from_parts<R>(
        reader: FrameReader<R>,
        writer: FrameWriter<W>,
        codec: Arc<dyn WireCodec>,
    ) -> Self
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let shutdown = Arc::new(AtomicBool::new(false));

        let reader_thread = std::thread::spawn({
            let codec = Arc::clone(&codec);
            let shutdown = Arc::clone(&shutdown);
            move || receiver::run(reader, codec, tx, shutdown)
        });

        Self {
            writer,
            queue: rx,
            codec,
            shutdown,
            reader_thread: Some(reader_thread),
        }
    }

    /// Encode and send one command frame.
    pub fn send_command(&mut self, opcode: Opcode) -> Result<()> {
        debug!(command = %opcode, "sending command");
        let payload = self.codec.encode_command(opcode);
        self.writer.send(&payload)?;
        Ok(())
    }

    /// Pop responses until one carries `opcode`.
    ///
    /// Every non-matching response popped on the way is permanently
    /// discarded: never re-queued, and lost to any other call site
    /// that wanted it. Streaming consumers use [`next_message`]
    /// instead for exactly this reason.
    ///
    /// [`next_message`]: HealthClient::next_message
    pub fn wait_for(&mut self, opcode: Opcode) -> Result<Response> {
        loop {
            let response = self.next_message()?;
            if response.opcode() == opcode {
                return Ok(response);
            }
            debug!(
                discarded = %response.opcode(),
                waiting_for = %opcode,
                "discarding non-matching response"
            );
        }
    }

    /// Wait for the next `ACK` and report whether it acknowledges
    /// `opcode`.
    ///
    /// A mismatched ack is a normal outcome, not an error: the caller
    /// decides how to react.
    pub fn wait_ack(&mut self, opcode: Opcode) -> Result<bool> {
        match self.wait_for(Opcode::Ack)? {
            Response::Ack { acked } => Ok(acked == opcode),
            _ => unreachable!("wait_for(ACK) yields only ack responses"),
        }
    }

    /// Request the firmware version triple.
    pub fn get_version(&mut self) -> Result<VersionInfo> {
        self.send_command(Opcode::Version)?;
        let _acked = self.wait_ack(Opcode::Version)?;

        match self.wait_for(Opcode::Version)? {
            Response::Version(text) => Ok(VersionInfo::parse(&text)),
            _ => unreachable!("wait_for(VERSION) yields only version responses"),
        }
    }

    /// Trigger a single measurement.
    ///
    /// The firmware answers `ACK`, then the health record, then the
    /// respiration waveform; the two reads here follow that fixed
    /// emission order.
    pub fn one_shot(&mut self) -> Result<(HealthMsg, Vector)> {
        self.send_command(Opcode::OneShot)?;
        let _acked = self.wait_ack(Opcode::OneShot)?;

        let health = match self.wait_for(Opcode::HealthMsg)? {
            Response::Health(health) => health,
            _ => unreachable!("wait_for(HEALTH_MSG) yields only health responses"),
        };
        let wave = match self.wait_for(Opcode::OneShot)? {
            Response::Wave(wave) => wave,
            _ => unreachable!("wait_for(ONE_SHOT) yields only waveform responses"),
        };
        Ok((health, wave))
    }

    /// Start fixed-rate streaming. Returns the ack verdict.
    ///
    /// While streaming, the device emits a health record and a waveform
    /// back-to-back at 10 Hz; drain them with [`next_message`].
    ///
    /// [`next_message`]: HealthClient::next_message
    pub fn start(&mut self) -> Result<bool> {
        self.send_command(Opcode::Start)?;
        self.wait_ack(Opcode::Start)
    }

    /// Stop streaming. Returns the ack verdict.
    pub fn stop(&mut self) -> Result<bool> {
        self.send_command(Opcode::Stop)?;
        self.wait_ack(Opcode::Stop)
    }

    /// Pop the next response in arrival order, blocking while the queue
    /// is empty. No opcode filtering, nothing discarded.
    pub fn next_message(&mut self) -> Result<Response> {
        self.queue.recv().map_err(|_| ClientError::Disconnected)
    }

    /// Tear the connection down: stop the receive thread and release
    /// the link. Idempotent; also runs on drop.
    pub fn disconnect(&mut self) {
        if self.reader_thread.is_none() {
            return;
        }
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.reader_thread.take() {
            let _ = handle.join();
        }
        info!("disconnected");
    }
}

impl<W: Write> Drop for HealthClient<W> {
    fn drop(&mut self) {
        self.disconnect();
    }
}
