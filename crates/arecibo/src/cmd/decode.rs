use arecibo_frame::{to_binary, CodecConfig, FrameCodec, Message};
use arecibo_glyph::GlyphTable;
use serde::Serialize;
use tracing::info;

use crate::cmd::{resolve_input, DecodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_json, print_raw, units_table, OutputFormat, UnitOutput};

#[derive(Serialize, Debug)]
struct DecodeOutput<'a> {
    table: &'a str,
    chars: usize,
    text: &'a str,
    units: Vec<UnitOutput>,
}

pub fn run(args: DecodeArgs, format: OutputFormat, table: &GlyphTable) -> CliResult<i32> {
    let input = resolve_input(args.signal.as_deref(), args.file.as_deref())?;
    let bits = to_binary(&input, args.radix).map_err(|err| frame_error("decode failed", err))?;

    let config = CodecConfig {
        max_signal_bits: args.max_bits,
    };
    let message = FrameCodec::with_config(table, config)
        .decode(&bits)
        .map_err(|err| frame_error("decode failed", err))?;
    info!(chars = message.len(), bits = bits.len(), "decoded signal");

    print_decoded(&build_output(table, &message), format);
    Ok(SUCCESS)
}

fn build_output<'a>(table: &'a GlyphTable, message: &'a Message) -> DecodeOutput<'a> {
    DecodeOutput {
        table: table.name(),
        chars: message.len(),
        text: message.text(),
        units: message.units().map(UnitOutput::from).collect(),
    }
}

fn print_decoded(output: &DecodeOutput<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(output),
        OutputFormat::Table => println!("{}", units_table(&output.units)),
        OutputFormat::Pretty => {
            println!("{} text is {} characters long", output.table, output.chars);
            println!("{}", output.text);
        }
        OutputFormat::Raw => print_raw(output.text.as_bytes()),
    }
}
