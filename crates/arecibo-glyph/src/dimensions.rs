use crate::error::{GlyphError, Result};

/// Glyph geometry: columns and rows of every bitmap in a table.
///
/// All block arithmetic in the signal format derives from these two numbers:
///
/// ```text
/// glyph  = width * height bits
/// block  = glyph + width bits   (one glyph followed by its gap)
/// frame  = height silence + width meter + N units + height meter + width silence
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Create dimensions, rejecting zero sizes and sizes whose block length overflows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let block = width
            .checked_mul(height)
            .and_then(|glyph| glyph.checked_add(width));
        if width == 0 || height == 0 || block.is_none() {
            return Err(GlyphError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub(crate) const fn from_parts(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Glyph columns.
    pub const fn width(self) -> usize {
        self.width
    }

    /// Glyph rows.
    pub const fn height(self) -> usize {
        self.height
    }

    /// Bits in one glyph pattern.
    pub const fn glyph_bits(self) -> usize {
        self.width * self.height
    }

    /// Bits in one framing block (a glyph plus its `width`-bit gap).
    pub const fn block_bits(self) -> usize {
        self.glyph_bits() + self.width
    }

    /// Fewest blocks a valid signal can have: both silences, both meters, one unit.
    pub const fn min_blocks(self) -> usize {
        2 * self.height + 2 * self.width + 1
    }
}
