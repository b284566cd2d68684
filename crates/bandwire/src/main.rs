mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bandwire", version, about = "Band protocol diagnostics CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match cmd::run(cli.command, format) {
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
    fn parses_exec_with_repeated_args() {
        let cli = Cli::try_parse_from([
            "bandwire",
            "exec",
            "SystemSettingsSetMeTileImage",
            "--arg",
            "A=1",
            "--arg",
            "B=2",
            "--transport",
            "mock",
        ])
        .expect("exec args should parse");

        match cli.command {
            Command::Exec(args) => assert_eq!(args.args, vec!["A=1", "B=2"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_transport() {
        let err = Cli::try_parse_from(["bandwire", "info", "--transport", "serial"])
            .expect_err("unknown transport should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn format_is_global() {
        let cli = Cli::try_parse_from(["bandwire", "decode-status", "fea600000000", "--format", "json"])
            .expect("global format should parse after the subcommand");
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }
}
