//! Operate the Health firmware with manual polling.
//!
//! Manual polling jitters; streaming locks to the radar's fixed
//! 10 frames/second rate. See `streaming.rs` for that mode.
//!
//! Run with: `cargo run --example polling -- /dev/ttyACM0`

use std::time::Duration;

use slmx4::client::{connect, ClientError};

fn main() -> Result<(), ClientError> {
    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyACM0".to_string());

    let mut slmx4 = connect(&port)?;

    // The version info is a triple: firmware name, firmware version,
    // protocol version.
    let version = slmx4.get_version()?;
    println!("ver = {version}");

    for _ in 0..10 {
        let (health, wave) = slmx4.one_shot()?;

        println!(
            "presence={} respiration={} rpm={:.1} distance={:.2}",
            health.presence_detected,
            health.respiration_detected,
            health.respiration_rpm,
            health.distance
        );
        println!("wave: {} samples", wave.len);

        // Roughly the 10 FPS rate the hardware produces.
        std::thread::sleep(Duration::from_millis(100));
    }

    slmx4.disconnect();
    Ok(())
}
