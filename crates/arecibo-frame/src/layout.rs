use arecibo_glyph::Dimensions;

/// Fixed block patterns for one glyph geometry.
///
/// ```text
/// zero silence  0000000000 ... 0   (glyph + gap bits)
/// one silence   1111111111 ... 1   (glyph + gap bits)
/// meter         1111 ... 1 00000   (glyph bits of 1, then the gap)
/// gap           00000              (width bits)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalLayout {
    dimensions: Dimensions,
    zero_silence: String,
    one_silence: String,
    meter: String,
    gap: String,
}

impl SignalLayout {
    pub fn new(dimensions: Dimensions) -> Self {
        let block = dimensions.block_bits();
        let gap = "0".repeat(dimensions.width());
        let mut meter = "1".repeat(dimensions.glyph_bits());
        meter.push_str(&gap);

        Self {
            dimensions,
            zero_silence: "0".repeat(block),
            one_silence: "1".repeat(block),
            meter,
            gap,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width()
    }

    pub fn height(&self) -> usize {
        self.dimensions.height()
    }

    pub fn glyph_bits(&self) -> usize {
        self.dimensions.glyph_bits()
    }

    pub fn block_bits(&self) -> usize {
        self.dimensions.block_bits()
    }

    pub fn min_blocks(&self) -> usize {
        self.dimensions.min_blocks()
    }

    /// Framing blocks around the data units: both silences and both meters.
    pub fn framing_blocks(&self) -> usize {
        2 * self.height() + 2 * self.width()
    }

    /// Bit offset of the first data unit.
    pub fn data_offset(&self) -> usize {
        (self.height() + self.width()) * self.block_bits()
    }

    /// Total framed length for a message of `chars` characters, if it fits in `usize`.
    pub fn encoded_len(&self, chars: usize) -> Option<usize> {
        self.framing_blocks()
            .checked_add(chars)?
            .checked_mul(self.block_bits())
    }

    /// All-zero leading silence block.
    pub fn zero_silence(&self) -> &str {
        &self.zero_silence
    }

    /// All-one trailing silence block.
    pub fn one_silence(&self) -> &str {
        &self.one_silence
    }

    /// Meter block: a glyph's worth of ones followed by the gap.
    pub fn meter(&self) -> &str {
        &self.meter
    }

    /// Zero run that follows every glyph.
    pub fn gap(&self) -> &str {
        &self.gap
    }
}
