mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "slmx4", version, about = "SLM-X4 health sensor CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_oneshot_subcommand() {
        let cli = Cli::try_parse_from([
            "slmx4",
            "oneshot",
            "/dev/ttyACM0",
            "--count",
            "5",
            "--interval",
            "100ms",
        ])
        .expect("oneshot args should parse");

        assert!(matches!(cli.command, Command::Oneshot(_)));
    }

    #[test]
    fn parses_stream_subcommand() {
        let cli = Cli::try_parse_from(["slmx4", "stream", "/dev/ttyACM0", "--count", "20"])
            .expect("stream args should parse");
        assert!(matches!(cli.command, Command::Stream(_)));
    }

    #[test]
    fn parses_info_subcommand() {
        let cli = Cli::try_parse_from(["slmx4", "info", "/dev/ttyACM0"])
            .expect("info args should parse");
        assert!(matches!(cli.command, Command::Info(_)));
    }

    #[test]
    fn rejects_missing_port() {
        let err = Cli::try_parse_from(["slmx4", "oneshot"]).expect_err("missing port should fail");
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
