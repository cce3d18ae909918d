/// Limits applied when loading glyph tables from external documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Maximum bytes read from a table file.
    pub max_table_file_size: usize,
    /// Maximum number of glyphs accepted in one table.
    pub max_glyphs: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_table_file_size: 256 * 1024,
            max_glyphs: 65_536,
        }
    }
}
