use arecibo_frame::{wrap, CodecConfig, FrameCodec, Signal};
use arecibo_glyph::GlyphTable;
use serde::Serialize;
use tracing::info;

use crate::cmd::{resolve_input, EncodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_json, print_raw, units_table, OutputFormat, UnitOutput};

#[derive(Serialize, Debug)]
struct EncodeOutput<'a> {
    table: &'a str,
    radix: String,
    chars: usize,
    bits: usize,
    signal: String,
    units: Vec<UnitOutput>,
}

pub fn run(args: EncodeArgs, format: OutputFormat, table: &GlyphTable) -> CliResult<i32> {
    let text = resolve_input(args.text.as_deref(), args.file.as_deref())?;
    let config = CodecConfig {
        max_signal_bits: args.max_bits,
    };
    let codec = FrameCodec::with_config(table, config);

    let signal = codec
        .encode(&text)
        .map_err(|err| frame_error("encode failed", err))?;
    let rendered = signal
        .render(args.radix)
        .map_err(|err| frame_error("encode failed", err))?;
    info!(
        chars = signal.units().len(),
        bits = signal.len(),
        radix = %args.radix,
        "encoded signal"
    );

    let output = build_output(table, &signal, args.radix.to_string(), rendered);
    print_encoded(&output, format, args.wrap);
    Ok(SUCCESS)
}

fn build_output<'a>(
    table: &'a GlyphTable,
    signal: &Signal,
    radix: String,
    rendered: String,
) -> EncodeOutput<'a> {
    EncodeOutput {
        table: table.name(),
        radix,
        chars: signal.units().len(),
        bits: signal.len(),
        signal: rendered,
        units: signal.units().map(UnitOutput::from).collect(),
    }
}

fn print_encoded(output: &EncodeOutput<'_>, format: OutputFormat, width: usize) {
    match format {
        OutputFormat::Json => print_json(output),
        OutputFormat::Table => {
            println!("{}", units_table(&output.units));
            println!("{}", wrap(&output.signal, width));
        }
        OutputFormat::Pretty => {
            println!(
                "{} data is {} {} digits long ({} characters, {} bits)",
                output.table,
                output.signal.len(),
                output.radix,
                output.chars,
                output.bits
            );
            println!("{}", wrap(&output.signal, width));
        }
        OutputFormat::Raw => {
            let mut body = wrap(&output.signal, width);
            body.push('\n');
            print_raw(body.as_bytes());
        }
    }
}
