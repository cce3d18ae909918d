use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::TableConfig;
use crate::dimensions::Dimensions;
use crate::error::{GlyphError, Result};
use crate::table::{GlyphTable, TableInfo};

/// JSON Schema every external table document must satisfy.
pub const TABLE_SCHEMA: &str = r#"{
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "type": "object",
    "properties": {
        "name": { "type": "string", "minLength": 1 },
        "version": { "type": "string" },
        "date": { "type": "string" },
        "width": { "type": "integer", "minimum": 1, "maximum": 64 },
        "height": { "type": "integer", "minimum": 1, "maximum": 64 },
        "glyphs": {
            "type": "array",
            "minItems": 1,
            "items": { "type": "string", "pattern": "^[01]+$" }
        }
    },
    "required": ["name", "version", "width", "height", "glyphs"],
    "additionalProperties": false
}"#;

#[derive(Debug, Serialize, Deserialize)]
struct TableDocument {
    name: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    width: usize,
    height: usize,
    glyphs: Vec<String>,
}

impl GlyphTable {
    /// Parse a table document with default limits.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_config(json, &TableConfig::default())
    }

    /// Parse a table document with explicit limits.
    pub fn from_json_with_config(json: &str, config: &TableConfig) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        validate_document(&value)?;

        let document: TableDocument = serde_json::from_value(value)?;
        if document.glyphs.len() > config.max_glyphs {
            return Err(GlyphError::TooManyGlyphs {
                count: document.glyphs.len(),
                max: config.max_glyphs,
            });
        }

        let mut info = TableInfo::new(document.name, document.version);
        info.date = document.date;
        let dimensions = Dimensions::new(document.width, document.height)?;
        GlyphTable::new(info, dimensions, document.glyphs)
    }

    /// Load a table document from a file with default limits.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_file_with_config(path, &TableConfig::default())
    }

    /// Load a table document from a file with explicit limits.
    pub fn from_file_with_config(path: &Path, config: &TableConfig) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|err| {
            GlyphError::LoadFailed(format!("failed opening {}: {err}", path.display()))
        })?;
        let metadata = file
            .metadata()
            .map_err(|err| GlyphError::LoadFailed(format!("{}: {err}", path.display())))?;
        if !metadata.is_file() {
            return Err(GlyphError::LoadFailed(format!(
                "not a regular file: {}",
                path.display()
            )));
        }
        if metadata.len() > config.max_table_file_size as u64 {
            return Err(GlyphError::LoadFailed(format!(
                "table file too large ({} bytes): {}",
                metadata.len(),
                path.display()
            )));
        }

        let max_bytes = config.max_table_file_size;
        let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
        let mut content = String::new();
        file.take(read_limit)
            .read_to_string(&mut content)
            .map_err(|err| {
                GlyphError::LoadFailed(format!("failed reading {}: {err}", path.display()))
            })?;
        if content.len() > max_bytes {
            return Err(GlyphError::LoadFailed(format!(
                "table file too large while reading: {}",
                path.display()
            )));
        }

        let table = Self::from_json_with_config(&content, config)?;
        debug!(path = ?path, name = %table.name(), "loaded glyph table");
        Ok(table)
    }

    /// Serialize the table back into the document format.
    pub fn to_json(&self) -> Result<String> {
        let info = self.info();
        let document = TableDocument {
            name: info.name.clone(),
            version: info.version.clone(),
            date: info.date.clone(),
            width: self.width(),
            height: self.height(),
            glyphs: self.patterns().to_vec(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

fn table_validator() -> Result<&'static Validator> {
    static VALIDATOR: OnceLock<std::result::Result<Validator, String>> = OnceLock::new();
    VALIDATOR
        .get_or_init(|| {
            let schema: Value = serde_json::from_str(TABLE_SCHEMA).map_err(|e| e.to_string())?;
            jsonschema::validator_for(&schema).map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|msg| GlyphError::ValidationFailed(format!("table schema unusable: {msg}")))
}

fn validate_document(value: &Value) -> Result<()> {
    let validator = table_validator()?;

    let mut errors = validator.iter_errors(value);
    if let Some(first) = errors.next() {
        let mut message = first.to_string();
        for err in errors.take(3) {
            message.push_str("; ");
            message.push_str(&err.to_string());
        }
        return Err(GlyphError::ValidationFailed(message));
    }

    Ok(())
}
