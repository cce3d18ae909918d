use arecibo_glyph::GlyphTable;
use serde::Serialize;

use crate::cmd::TableArgs;
use crate::exit::{glyph_error, CliResult, SUCCESS};
use crate::output::{char_label, new_table, print_json, print_raw, OutputFormat};

#[derive(Serialize, Debug)]
struct TableOutput<'a> {
    name: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    width: usize,
    height: usize,
    size: usize,
    block_bits: usize,
    min_blocks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    glyphs: Option<Vec<GlyphEntry<'a>>>,
}

#[derive(Serialize, Debug)]
struct GlyphEntry<'a> {
    codepoint: u32,
    #[serde(rename = "char")]
    label: String,
    pattern: &'a str,
}

pub fn run(args: TableArgs, format: OutputFormat, table: &GlyphTable) -> CliResult<i32> {
    let output = build_output(table, args.glyphs);
    match format {
        OutputFormat::Json => print_json(&output),
        OutputFormat::Table => {
            let mut summary = new_table(vec!["FIELD", "VALUE"]);
            summary
                .add_row(vec!["name", output.name])
                .add_row(vec!["version", output.version])
                .add_row(vec!["date", output.date.unwrap_or("-")])
                .add_row(vec!["width".to_string(), output.width.to_string()])
                .add_row(vec!["height".to_string(), output.height.to_string()])
                .add_row(vec!["size".to_string(), output.size.to_string()])
                .add_row(vec!["block_bits".to_string(), output.block_bits.to_string()])
                .add_row(vec!["min_blocks".to_string(), output.min_blocks.to_string()]);
            println!("{summary}");

            if let Some(glyphs) = &output.glyphs {
                let mut listing = new_table(vec!["CODEPOINT", "CHAR", "PATTERN"]);
                for glyph in glyphs {
                    listing.add_row(vec![
                        glyph.codepoint.to_string(),
                        glyph.label.clone(),
                        glyph.pattern.to_string(),
                    ]);
                }
                println!("{listing}");
            }
        }
        OutputFormat::Pretty => {
            match output.date {
                Some(date) => println!("{} v{} ({date})", output.name, output.version),
                None => println!("{} v{}", output.name, output.version),
            }
            println!(
                "{}x{} glyphs, {} codepoints, {}-bit blocks, at least {} blocks per signal",
                output.width, output.height, output.size, output.block_bits, output.min_blocks
            );
            for glyph in output.glyphs.iter().flatten() {
                println!("{:>6}  {:<8}  {}", glyph.codepoint, glyph.label, glyph.pattern);
            }
        }
        // The table document itself, loadable again with --table.
        OutputFormat::Raw => {
            let mut document = table
                .to_json()
                .map_err(|err| glyph_error("failed serializing table", err))?;
            document.push('\n');
            print_raw(document.as_bytes());
        }
    }
    Ok(SUCCESS)
}

fn build_output(table: &GlyphTable, with_glyphs: bool) -> TableOutput<'_> {
    let info = table.info();
    let dimensions = table.dimensions();
    TableOutput {
        name: &info.name,
        version: &info.version,
        date: info.date.as_deref(),
        width: dimensions.width(),
        height: dimensions.height(),
        size: table.len(),
        block_bits: dimensions.block_bits(),
        min_blocks: dimensions.min_blocks(),
        glyphs: with_glyphs.then(|| {
            table
                .iter()
                .map(|(codepoint, pattern)| GlyphEntry {
                    codepoint,
                    label: char_label(codepoint),
                    pattern,
                })
                .collect()
        }),
    }
}
