use std::time::Duration;

use slmx4_client::connect;

use crate::cmd::OneshotArgs;
use crate::exit::{client_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_health, print_wave, OutputFormat};

pub fn run(args: OneshotArgs, format: OutputFormat) -> CliResult<i32> {
    let interval = parse_duration(&args.interval)?;

    let mut client = connect(&args.port).map_err(|err| client_error("connect failed", err))?;

    for remaining in (0..args.count).rev() {
        let (health, wave) = client
            .one_shot()
            .map_err(|err| client_error("measurement failed", err))?;

        print_health(&health, format);
        if args.wave {
            print_wave(&wave, format);
        }

        if remaining > 0 {
            std::thread::sleep(interval);
        }
    }

    client.disconnect();
    Ok(SUCCESS)
}

pub(crate) fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "ms")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(CliError::new(
            USAGE,
            format!("unsupported duration unit: {unit}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_seconds_and_millis() {
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("150ms").unwrap(), Duration::from_millis(150));
        assert_eq!(parse_duration("100").unwrap(), Duration::from_millis(100));
    }

    #[test]
    fn parse_duration_rejects_invalid_values() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("bad").is_err());
    }

    #[test]
    fn parse_duration_allows_zero() {
        // Back-to-back polling is legitimate; the firmware paces itself.
        assert_eq!(parse_duration("0ms").unwrap(), Duration::ZERO);
    }
}
