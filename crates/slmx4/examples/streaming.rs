//! Operate the Health firmware in data-streaming mode.
//!
//! The radar data rate is fixed in hardware at 10 frames/second; in
//! streaming mode the device sends two messages back-to-back per
//! sample: the health record, then the respiration waveform.
//!
//! Run with: `cargo run --example streaming -- /dev/ttyACM0`

use slmx4::client::{connect, ClientError};
use slmx4::schema::Response;

fn main() -> Result<(), ClientError> {
    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyACM0".to_string());

    let mut slmx4 = connect(&port)?;

    let version = slmx4.get_version()?;
    println!("ver = {version}");

    if !slmx4.start()? {
        println!("device refused START");
        return Ok(());
    }

    for _ in 0..50 {
        match slmx4.next_message()? {
            Response::Health(health) => println!(
                "presence={} rpm={:.1} frame={:?}",
                health.presence_detected,
                health.respiration_rpm,
                health.frame_count()
            ),
            Response::Wave(wave) => println!("wave: {} samples", wave.len),
            other => println!("unexpected: {}", other.opcode()),
        }
    }

    if !slmx4.stop()? {
        println!("device refused STOP");
    }

    slmx4.disconnect();
    Ok(())
}
