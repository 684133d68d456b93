use slmx4_client::connect;

use crate::cmd::InfoArgs;
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_version_info, OutputFormat};

pub fn run(args: InfoArgs, format: OutputFormat) -> CliResult<i32> {
    let mut client = connect(&args.port).map_err(|err| client_error("connect failed", err))?;

    let version = client
        .get_version()
        .map_err(|err| client_error("version query failed", err))?;

    print_version_info(&args.port.to_string_lossy(), &version, format);

    client.disconnect();
    Ok(SUCCESS)
}
