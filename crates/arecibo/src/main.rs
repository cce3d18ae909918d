mod cmd;
mod exit;
mod logging;
mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "arecibo",
    version,
    about = "Encode text as Arecibo-style glyph signals and decode them back"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "ARECIBO_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// JSON glyph table to use instead of the built-in USCII table.
    #[arg(long, value_name = "PATH", env = "ARECIBO_TABLE", global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests are not failures.
            let code = if err.use_stderr() {
                exit::USAGE
            } else {
                exit::SUCCESS
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format, cli.table.as_deref());

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
    use arecibo_frame::Radix;

    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from(["arecibo", "encode", "Hi", "--radix", "hex", "--wrap", "64"])
            .expect("encode args should parse");

        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.text.as_deref(), Some("Hi"));
                assert_eq!(args.radix, Radix::Hexadecimal);
                assert_eq!(args.wrap, 64);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_text_with_file() {
        let err = Cli::try_parse_from(["arecibo", "encode", "Hi", "--file", "/tmp/message.txt"])
            .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_unknown_radix() {
        let err = Cli::try_parse_from(["arecibo", "decode", "0101", "--radix", "octal"])
            .expect_err("unknown radix should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "arecibo",
            "table",
            "--glyphs",
            "--format",
            "json",
            "--table",
            "/tmp/custom.json",
        ])
        .expect("table args should parse");

        assert!(matches!(cli.format, Some(OutputFormat::Json)));
        assert_eq!(cli.table, Some(PathBuf::from("/tmp/custom.json")));
        assert!(matches!(cli.command, Command::Table(ref args) if args.glyphs));
    }

    #[test]
    fn decode_defaults_to_binary() {
        let cli = Cli::try_parse_from(["arecibo", "decode"]).expect("decode args should parse");
        match cli.command {
            Command::Decode(args) => {
                assert!(args.signal.is_none());
                assert_eq!(args.radix, Radix::Binary);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
