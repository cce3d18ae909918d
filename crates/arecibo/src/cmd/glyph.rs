use arecibo_frame::ensure_codepoints_valid;
use arecibo_glyph::GlyphTable;
use serde::Serialize;

use crate::cmd::GlyphArgs;
use crate::exit::{frame_error, glyph_error, CliResult, SUCCESS};
use crate::output::{char_label, new_table, print_json, print_raw, OutputFormat};

const INK: char = '#';
const PAPER: char = '.';
const GLYPHS_PER_BAND: usize = 8;

#[derive(Serialize, Debug, PartialEq, Eq)]
struct Bitmap {
    /// `None` for meter glyphs.
    codepoint: Option<u32>,
    #[serde(rename = "char")]
    label: String,
    rows: Vec<String>,
}

pub fn run(args: GlyphArgs, format: OutputFormat, table: &GlyphTable) -> CliResult<i32> {
    ensure_codepoints_valid(&args.text, table)
        .map_err(|err| frame_error("glyph failed", err))?;
    let bitmaps = collect_bitmaps(table, &args.text, args.meters)?;

    match format {
        OutputFormat::Json => print_json(&bitmaps),
        OutputFormat::Table => {
            let mut listing = new_table(vec!["CODEPOINT", "CHAR", "BITMAP"]);
            for bitmap in &bitmaps {
                listing.add_row(vec![
                    bitmap
                        .codepoint
                        .map_or_else(|| "-".to_string(), |cp| cp.to_string()),
                    bitmap.label.clone(),
                    bitmap
                        .rows
                        .iter()
                        .map(|row| to_art(row))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ]);
            }
            println!("{listing}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            print_raw(render_bands(&bitmaps, table.height()).as_bytes());
        }
    }
    Ok(SUCCESS)
}

fn collect_bitmaps(table: &GlyphTable, text: &str, meters: bool) -> CliResult<Vec<Bitmap>> {
    let meter = || Bitmap {
        codepoint: None,
        label: "meter".to_string(),
        rows: vec!["1".repeat(table.width()); table.height()],
    };

    let mut bitmaps = Vec::new();
    if meters {
        bitmaps.extend((0..table.width()).map(|_| meter()));
    }
    for c in text.chars() {
        let codepoint = u32::from(c);
        let rows = table
            .rows(codepoint)
            .map_err(|err| glyph_error("glyph failed", err))?
            .map(str::to_string)
            .collect();
        bitmaps.push(Bitmap {
            codepoint: Some(codepoint),
            label: char_label(codepoint),
            rows,
        });
    }
    if meters {
        bitmaps.extend((0..table.height()).map(|_| meter()));
    }
    Ok(bitmaps)
}

fn to_art(row: &str) -> String {
    row.chars()
        .map(|bit| if bit == '1' { INK } else { PAPER })
        .collect()
}

/// Bitmaps side by side, a fixed number per band, bands separated by a blank line.
fn render_bands(bitmaps: &[Bitmap], height: usize) -> String {
    let mut out = String::new();
    for (index, band) in bitmaps.chunks(GLYPHS_PER_BAND).enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for row in 0..height {
            let line: Vec<String> = band.iter().map(|bitmap| to_art(&bitmap.rows[row])).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
    }
    out
}
