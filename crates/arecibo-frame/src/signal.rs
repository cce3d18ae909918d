use crate::error::Result;
use crate::radix::{from_binary, Radix};

/// One character of a message and where its glyph sits in the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Index of the character within the message.
    pub position: usize,
    /// Table codepoint, usable as an index into glyph images.
    pub codepoint: u32,
    /// Bit offset of the glyph inside the framed signal.
    pub offset: usize,
}

impl Unit {
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct UnitMap {
    codepoints: Vec<u32>,
    data_offset: usize,
    block_bits: usize,
}

impl UnitMap {
    fn units(&self) -> impl ExactSizeIterator<Item = Unit> + '_ {
        self.codepoints
            .iter()
            .enumerate()
            .map(move |(position, codepoint)| Unit {
                position,
                codepoint: *codepoint,
                offset: self.data_offset + position * self.block_bits,
            })
    }
}

/// A framed bit-string produced by encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    bits: String,
    map: UnitMap,
}

impl Signal {
    pub(crate) fn new(
        bits: String,
        codepoints: Vec<u32>,
        data_offset: usize,
        block_bits: usize,
    ) -> Self {
        Self {
            bits,
            map: UnitMap {
                codepoints,
                data_offset,
                block_bits,
            },
        }
    }

    /// The signal as `'0'`/`'1'` characters.
    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn into_bits(self) -> String {
        self.bits
    }

    /// Signal length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Encoded characters in message order.
    pub fn units(&self) -> impl ExactSizeIterator<Item = Unit> + '_ {
        self.map.units()
    }

    pub fn to_hex(&self) -> Result<String> {
        self.render(Radix::Hexadecimal)
    }

    pub fn render(&self, radix: Radix) -> Result<String> {
        from_binary(&self.bits, radix)
    }
}

/// Text recovered by decoding a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    map: UnitMap,
}

impl Message {
    pub(crate) fn new(
        text: String,
        codepoints: Vec<u32>,
        data_offset: usize,
        block_bits: usize,
    ) -> Self {
        Self {
            text,
            map: UnitMap {
                codepoints,
                data_offset,
                block_bits,
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of decoded characters.
    pub fn len(&self) -> usize {
        self.map.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.codepoints.is_empty()
    }

    /// Decoded characters in message order.
    pub fn units(&self) -> impl ExactSizeIterator<Item = Unit> + '_ {
        self.map.units()
    }
}
