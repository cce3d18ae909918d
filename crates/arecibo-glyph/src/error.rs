/// Errors that can occur while building, loading, or querying a glyph table.
#[derive(Debug, thiserror::Error)]
pub enum GlyphError {
    /// Width or height is zero, or the derived block size overflows.
    #[error("invalid glyph dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The table has no entries.
    #[error("glyph table is empty")]
    EmptyTable,

    /// The table has more entries than allowed.
    #[error("glyph table has {count} entries (max {max})")]
    TooManyGlyphs { count: usize, max: usize },

    /// A pattern does not have exactly `width * height` bits.
    #[error("glyph for codepoint {codepoint} is {actual} bits long, expected {expected}")]
    PatternLength {
        codepoint: u32,
        expected: usize,
        actual: usize,
    },

    /// A pattern contains something other than '0' or '1'.
    #[error("glyph for codepoint {codepoint} contains non-binary character {found:?}")]
    InvalidPatternBit { codepoint: u32, found: char },

    /// Two codepoints share a pattern, so the inverse lookup would be ambiguous.
    #[error("codepoints {first} and {second} share the same bit pattern")]
    DuplicatePattern { first: u32, second: u32 },

    /// The codepoint has no glyph in the table.
    #[error("codepoint {codepoint} is outside the glyph table (size {table_size})")]
    UnsupportedCodepoint { codepoint: u32, table_size: usize },

    /// The pattern has no entry in the reverse index.
    #[error("bit pattern not in the {table} table: {pattern}")]
    UnknownPattern { table: String, pattern: String },

    /// The table file could not be read.
    #[error("failed to load glyph table: {0}")]
    LoadFailed(String),

    /// The table document is not valid JSON.
    #[error("glyph table is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The table document does not match the table schema.
    #[error("glyph table failed validation: {0}")]
    ValidationFailed(String),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
