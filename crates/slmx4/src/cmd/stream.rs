use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use slmx4_client::connect;
use slmx4_schema::Response;
use tracing::{debug, warn};

use crate::cmd::StreamArgs;
use crate::exit::{client_error, CliError, CliResult, DEVICE_REFUSED, INTERNAL, SUCCESS};
use crate::output::{print_health, print_wave, OutputFormat};

pub fn run(args: StreamArgs, format: OutputFormat) -> CliResult<i32> {
    let interrupted = Arc::new(AtomicBool::new(false));
    ctrlc::set_handler({
        let interrupted = Arc::clone(&interrupted);
        move || interrupted.store(true, Ordering::Relaxed)
    })
    .map_err(|err| CliError::new(INTERNAL, format!("failed to install signal handler: {err}")))?;

    let mut client = connect(&args.port).map_err(|err| client_error("connect failed", err))?;

    if !client
        .start()
        .map_err(|err| client_error("start failed", err))?
    {
        return Err(CliError::new(
            DEVICE_REFUSED,
            "device did not acknowledge START",
        ));
    }

    // While streaming, the device sends two messages back-to-back per
    // sample: the health record, then the respiration waveform.
    let mut printed = 0usize;
    while !interrupted.load(Ordering::Relaxed)
        && args.count.is_none_or(|count| printed < count)
    {
        match client.next_message() {
            Ok(Response::Health(health)) => {
                print_health(&health, format);
                printed += 1;
            }
            Ok(Response::Wave(wave)) => {
                if args.wave {
                    print_wave(&wave, format);
                }
            }
            Ok(other) => {
                debug!(opcode = %other.opcode(), "ignoring non-streaming response");
            }
            Err(err) => {
                warn!(error = %err, "stream ended early");
                break;
            }
        }
    }

    if !client.stop().unwrap_or(false) {
        warn!("device did not acknowledge STOP");
    }

    client.disconnect();
    Ok(SUCCESS)
}
