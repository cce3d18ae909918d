use std::collections::HashMap;

use tracing::debug;

use crate::dimensions::Dimensions;
use crate::error::{GlyphError, Result};

/// Identity of a glyph table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub name: String,
    pub version: String,
    pub date: Option<String>,
}

impl TableInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// An immutable codepoint → bit pattern table with its reverse index.
///
/// Entry `i` is the glyph for codepoint `i`. Every pattern is exactly
/// `width * height` bits and no two codepoints share a pattern.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    info: TableInfo,
    dimensions: Dimensions,
    patterns: Vec<String>,
    reverse: HashMap<String, u32>,
}

impl GlyphTable {
    /// Build a table, checking every pattern and deriving the reverse index.
    pub fn new(info: TableInfo, dimensions: Dimensions, patterns: Vec<String>) -> Result<Self> {
        if patterns.is_empty() {
            return Err(GlyphError::EmptyTable);
        }
        let max = u32::MAX as usize;
        if patterns.len() > max {
            return Err(GlyphError::TooManyGlyphs {
                count: patterns.len(),
                max,
            });
        }

        let expected = dimensions.glyph_bits();
        let mut reverse = HashMap::with_capacity(patterns.len());
        for (index, pattern) in patterns.iter().enumerate() {
            let codepoint = index as u32;
            if let Some(found) = pattern.chars().find(|c| !matches!(c, '0' | '1')) {
                return Err(GlyphError::InvalidPatternBit { codepoint, found });
            }
            if pattern.len() != expected {
                return Err(GlyphError::PatternLength {
                    codepoint,
                    expected,
                    actual: pattern.len(),
                });
            }
            if let Some(first) = reverse.insert(pattern.clone(), codepoint) {
                return Err(GlyphError::DuplicatePattern {
                    first,
                    second: codepoint,
                });
            }
        }

        debug!(
            name = %info.name,
            glyphs = patterns.len(),
            width = dimensions.width(),
            height = dimensions.height(),
            "glyph table built"
        );

        Ok(Self {
            info,
            dimensions,
            patterns,
            reverse,
        })
    }

    /// Bit pattern for a codepoint.
    pub fn pattern_of(&self, codepoint: u32) -> Result<&str> {
        self.patterns
            .get(codepoint as usize)
            .map(String::as_str)
            .ok_or(GlyphError::UnsupportedCodepoint {
                codepoint,
                table_size: self.patterns.len(),
            })
    }

    /// Codepoint for a bit pattern.
    pub fn codepoint_of(&self, pattern: &str) -> Result<u32> {
        self.reverse
            .get(pattern)
            .copied()
            .ok_or_else(|| GlyphError::UnknownPattern {
                table: self.info.name.clone(),
                pattern: pattern.to_string(),
            })
    }

    pub fn contains_codepoint(&self, codepoint: u32) -> bool {
        (codepoint as usize) < self.patterns.len()
    }

    pub fn contains_pattern(&self, pattern: &str) -> bool {
        self.reverse.contains_key(pattern)
    }

    /// Rows of a glyph, top first, each `width` bits long.
    pub fn rows(&self, codepoint: u32) -> Result<impl Iterator<Item = &str> + '_> {
        let pattern = self.pattern_of(codepoint)?;
        let width = self.dimensions.width();
        Ok((0..self.dimensions.height()).map(move |row| &pattern[row * width..(row + 1) * width]))
    }

    /// `(codepoint, pattern)` pairs in codepoint order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| (index as u32, pattern.as_str()))
    }

    /// Number of supported codepoints.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn width(&self) -> usize {
        self.dimensions.width()
    }

    pub fn height(&self) -> usize {
        self.dimensions.height()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn info(&self) -> &TableInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub(crate) fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
