use bandwire_frame::{decode_status, STATUS_SIZE};

use crate::cmd::{parse_hex, DecodeStatusArgs};
use crate::exit::{frame_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_fields, print_json, print_pretty, OutputFormat, StatusOutput};

pub fn run(args: DecodeStatusArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = parse_hex(&args.hex)?;
    if bytes.len() != STATUS_SIZE {
        return Err(CliError::new(
            USAGE,
            format!("a status packet is {STATUS_SIZE} bytes, got {}", bytes.len()),
        ));
    }
    let status = decode_status(&bytes).map_err(|err| frame_error("decode failed", err))?;
    let out = StatusOutput::from(status);

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_fields(&out.rows()),
        OutputFormat::Pretty => print_pretty(&out.rows()),
        OutputFormat::Raw => println!("{}", out.display),
    }
    Ok(SUCCESS)
}
