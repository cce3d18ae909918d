//! Fixed-size bitmap glyph tables for Arecibo-style signals.
//!
//! A glyph table maps every supported codepoint to a `width * height` bit
//! pattern (row-major, leftmost column first, `'1'` = ink) and keeps the
//! inverse mapping so a receiver can turn patterns back into characters.
//!
//! Tables are immutable once built and can be shared freely between threads.
//! The built-in USCII-5x7-ENGLISH-C0 table is available through
//! [`uscii_5x7`]; custom tables load from JSON with [`GlyphTable::from_json`].

pub mod config;
pub mod dimensions;
pub mod error;
pub mod loader;
pub mod table;
pub mod uscii;

pub use config::TableConfig;
pub use dimensions::Dimensions;
pub use error::{GlyphError, Result};
pub use loader::TABLE_SCHEMA;
pub use table::{GlyphTable, TableInfo};
pub use uscii::uscii_5x7;
