use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod info;
pub mod oneshot;
pub mod ports;
pub mod stream;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query the device's firmware version triple.
    Info(InfoArgs),
    /// Trigger single measurements and print them (manual polling).
    Oneshot(OneshotArgs),
    /// Stream health/waveform pairs at the device's fixed rate.
    Stream(StreamArgs),
    /// List serial devices visible to the host.
    Ports(PortsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Info(args) => info::run(args, format),
        Command::Oneshot(args) => oneshot::run(args, format),
        Command::Stream(args) => stream::run(args, format),
        Command::Ports(args) => ports::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Serial device path (e.g. /dev/ttyACM0, COM3).
    pub port: PathBuf,
}

#[derive(Args, Debug)]
pub struct OneshotArgs {
    /// Serial device path (e.g. /dev/ttyACM0, COM3).
    pub port: PathBuf,
    /// Number of measurements to trigger.
    #[arg(long, default_value = "1")]
    pub count: u32,
    /// Delay between measurements (e.g. 100ms, 1s). Manual polling
    /// jitters; the streaming mode locks to the radar frame rate.
    #[arg(long, default_value = "100ms")]
    pub interval: String,
    /// Also print the respiration waveform for each measurement.
    #[arg(long)]
    pub wave: bool,
}

#[derive(Args, Debug)]
pub struct StreamArgs {
    /// Serial device path (e.g. /dev/ttyACM0, COM3).
    pub port: PathBuf,
    /// Exit after printing N health records. Default: until Ctrl-C.
    #[arg(long)]
    pub count: Option<usize>,
    /// Also print the respiration waveforms.
    #[arg(long)]
    pub wave: bool,
}

#[derive(Args, Debug, Default)]
pub struct PortsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
