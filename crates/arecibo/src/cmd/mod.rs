use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use arecibo_frame::{Radix, DEFAULT_MAX_SIGNAL_BITS};
use arecibo_glyph::{uscii_5x7, GlyphTable};
use clap::{Args, Subcommand};

use crate::exit::{glyph_error, io_error, CliResult};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod glyph;
pub mod table;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode text as a framed signal.
    Encode(EncodeArgs),
    /// Decode a framed signal back into text.
    Decode(DecodeArgs),
    /// Show glyph table metadata.
    Table(TableArgs),
    /// Render the glyph bitmaps for some text.
    Glyph(GlyphArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat, table_path: Option<&Path>) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format, &load_table(table_path)?),
        Command::Decode(args) => decode::run(args, format, &load_table(table_path)?),
        Command::Table(args) => table::run(args, format, &load_table(table_path)?),
        Command::Glyph(args) => glyph::run(args, format, &load_table(table_path)?),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to encode. Reads stdin when neither TEXT nor --file is given.
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,
    /// Read the text from a file. One trailing line ending is dropped.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Output radix: binary or hex.
    #[arg(long, short = 'r', default_value_t = Radix::Binary)]
    pub radix: Radix,
    /// Break the signal into lines of N digits (0 keeps one line).
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub wrap: usize,
    /// Refuse to produce signals longer than this many bits.
    #[arg(long, value_name = "BITS", default_value_t = DEFAULT_MAX_SIGNAL_BITS)]
    pub max_bits: usize,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Signal to decode. Reads stdin when neither SIGNAL nor --file is given.
    #[arg(conflicts_with = "file")]
    pub signal: Option<String>,
    /// Read the signal from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Input radix: binary or hex. Whitespace is ignored.
    #[arg(long, short = 'r', default_value_t = Radix::Binary)]
    pub radix: Radix,
    /// Refuse signals longer than this many bits.
    #[arg(long, value_name = "BITS", default_value_t = DEFAULT_MAX_SIGNAL_BITS)]
    pub max_bits: usize,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Also list every codepoint and its bit pattern.
    #[arg(long)]
    pub glyphs: bool,
}

#[derive(Args, Debug)]
pub struct GlyphArgs {
    /// Characters to render.
    pub text: String,
    /// Surround the characters with the meter glyphs that frame a signal.
    #[arg(long)]
    pub meters: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// The built-in table, or the JSON table at `path`.
pub fn load_table(path: Option<&Path>) -> CliResult<Cow<'static, GlyphTable>> {
    match path {
        None => Ok(Cow::Borrowed(uscii_5x7())),
        Some(path) => {
            let table = GlyphTable::from_file(path).map_err(|err| {
                glyph_error(&format!("failed loading table {}", path.display()), err)
            })?;
            Ok(Cow::Owned(table))
        }
    }
}

/// Read command input from the positional argument, a file, or stdin.
///
/// File and stdin contents lose one trailing line ending.
pub fn resolve_input(inline: Option<&str>, file: Option<&Path>) -> CliResult<String> {
    if let Some(inline) = inline {
        return Ok(inline.to_string());
    }
    let content = match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?,
        None => io::read_to_string(io::stdin())
            .map_err(|err| io_error("failed reading stdin", err))?,
    };
    Ok(trim_line_ending(content))
}

fn trim_line_ending(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}
