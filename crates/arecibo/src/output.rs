use std::io::{IsTerminal, Write};

use arecibo_frame::Unit;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One character of an encoded or decoded message.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UnitOutput {
    pub position: usize,
    pub codepoint: u32,
    #[serde(rename = "char")]
    pub label: String,
    pub offset: usize,
}

impl From<Unit> for UnitOutput {
    fn from(unit: Unit) -> Self {
        Self {
            position: unit.position,
            codepoint: unit.codepoint,
            label: char_label(unit.codepoint),
            offset: unit.offset,
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn units_table(units: &[UnitOutput]) -> Table {
    let mut table = new_table(vec!["POSITION", "CODEPOINT", "CHAR", "OFFSET"]);
    for unit in units {
        table.add_row(vec![
            unit.position.to_string(),
            unit.codepoint.to_string(),
            unit.label.clone(),
            unit.offset.to_string(),
        ]);
    }
    table
}

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// Printable form of a codepoint: the character itself, or an escape for
/// controls and non-characters.
pub fn char_label(codepoint: u32) -> String {
    match char::from_u32(codepoint) {
        Some(' ') => "SP".to_string(),
        Some(c) if c.is_control() => c.escape_debug().to_string(),
        Some(c) => c.to_string(),
        None => format!("U+{codepoint:04X}"),
    }
}
