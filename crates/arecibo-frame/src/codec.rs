use arecibo_glyph::GlyphTable;
use tracing::{debug, trace};

use crate::blocks::Blocks;
use crate::error::{Boundary, FrameError, Result};
use crate::layout::SignalLayout;
use crate::radix::Radix;
use crate::signal::{Message, Signal};
use crate::validate::{ensure_binary_length, ensure_charset, ensure_codepoints_valid};

/// Default maximum signal size: 64 Mi bits.
pub const DEFAULT_MAX_SIGNAL_BITS: usize = 64 * 1024 * 1024;

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Longest signal, in bits, that will be produced or accepted.
    pub max_signal_bits: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_signal_bits: DEFAULT_MAX_SIGNAL_BITS,
        }
    }
}

/// Progress of a decode. Stages only move forward; any failed check ends the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DecodeStage {
    Raw,
    LengthChecked,
    LeadSilenceStripped,
    TrailSilenceStripped,
    LeadMeterStripped,
    TrailMeterStripped,
    UnitsParsed,
    Done,
}

/// Encoder/decoder for the framed signal of one glyph table.
#[derive(Debug, Clone)]
pub struct FrameCodec<'t> {
    table: &'t GlyphTable,
    layout: SignalLayout,
    config: CodecConfig,
}

impl<'t> FrameCodec<'t> {
    /// Create a codec with default configuration.
    pub fn new(table: &'t GlyphTable) -> Self {
        Self::with_config(table, CodecConfig::default())
    }

    /// Create a codec with explicit configuration.
    pub fn with_config(table: &'t GlyphTable, config: CodecConfig) -> Self {
        Self {
            table,
            layout: SignalLayout::new(table.dimensions()),
            config,
        }
    }

    pub fn table(&self) -> &'t GlyphTable {
        self.table
    }

    pub fn layout(&self) -> &SignalLayout {
        &self.layout
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode text into a framed signal.
    ///
    /// ```text
    /// ┌─────────────┬─────────────┬──────────────────┬─────────────┬─────────────┐
    /// │ silence (0) │ meter       │ glyph + gap      │ meter       │ silence (1) │
    /// │ height blks │ width blks  │ one per char     │ height blks │ width blks  │
    /// └─────────────┴─────────────┴──────────────────┴─────────────┴─────────────┘
    /// ```
    pub fn encode(&self, text: &str) -> Result<Signal> {
        ensure_codepoints_valid(text, self.table)?;

        let chars = text.chars().count();
        let max = self.config.max_signal_bits;
        let total = self.layout.encoded_len(chars).unwrap_or(usize::MAX);
        if total > max {
            return Err(FrameError::MessageTooLong {
                chars,
                bits: total,
                max,
            });
        }

        let layout = &self.layout;
        let mut bits = String::with_capacity(total);
        for _ in 0..layout.height() {
            bits.push_str(layout.zero_silence());
        }
        for _ in 0..layout.width() {
            bits.push_str(layout.meter());
        }

        let mut codepoints = Vec::with_capacity(chars);
        for c in text.chars() {
            let codepoint = u32::from(c);
            bits.push_str(self.table.pattern_of(codepoint)?);
            bits.push_str(layout.gap());
            codepoints.push(codepoint);
        }

        for _ in 0..layout.height() {
            bits.push_str(layout.meter());
        }
        for _ in 0..layout.width() {
            bits.push_str(layout.one_silence());
        }
        debug_assert_eq!(bits.len(), total);

        debug!(chars, bits = bits.len(), table = %self.table.name(), "encoded signal");
        Ok(Signal::new(
            bits,
            codepoints,
            layout.data_offset(),
            layout.block_bits(),
        ))
    }

    /// Decode a framed signal back into text.
    ///
    /// Silence and meter blocks are told apart by position only, so the strip
    /// order is fixed: leading silence, trailing silence, leading meter,
    /// trailing meter. Whatever remains is data.
    pub fn decode(&self, bits: &str) -> Result<Message> {
        let mut stage = DecodeStage::Raw;
        if bits.len() > self.config.max_signal_bits {
            return Err(FrameError::SignalTooLong {
                bits: bits.len(),
                max: self.config.max_signal_bits,
            });
        }
        ensure_charset(bits, Radix::Binary)?;
        let block_count = ensure_binary_length(bits, &self.layout)?;
        advance(&mut stage, DecodeStage::LengthChecked);

        let layout = &self.layout;
        let mut blocks = Blocks::new(bits, layout.block_bits());

        strip_front(
            &mut blocks,
            layout.height(),
            layout.zero_silence(),
            Boundary::LeadingSilence,
        )?;
        advance(&mut stage, DecodeStage::LeadSilenceStripped);

        strip_back(
            &mut blocks,
            layout.width(),
            layout.one_silence(),
            Boundary::TrailingSilence,
        )?;
        advance(&mut stage, DecodeStage::TrailSilenceStripped);

        strip_front(
            &mut blocks,
            layout.width(),
            layout.meter(),
            Boundary::LeadingMeter,
        )?;
        advance(&mut stage, DecodeStage::LeadMeterStripped);

        strip_back(
            &mut blocks,
            layout.height(),
            layout.meter(),
            Boundary::TrailingMeter,
        )?;
        advance(&mut stage, DecodeStage::TrailMeterStripped);

        let mut text = String::with_capacity(blocks.len());
        let mut codepoints = Vec::with_capacity(blocks.len());
        for (unit, block) in blocks.enumerate() {
            let (pattern, gap) = block.split_at(layout.glyph_bits());
            if gap != layout.gap() {
                return Err(FrameError::BadSeparator {
                    unit,
                    width: layout.width(),
                });
            }
            let codepoint = self.lookup(pattern)?;
            let c = char::from_u32(codepoint).ok_or(FrameError::NotACharacter { codepoint })?;
            text.push(c);
            codepoints.push(codepoint);
        }
        advance(&mut stage, DecodeStage::UnitsParsed);

        advance(&mut stage, DecodeStage::Done);
        debug!(
            blocks = block_count,
            chars = codepoints.len(),
            table = %self.table.name(),
            "decoded signal"
        );
        Ok(Message::new(
            text,
            codepoints,
            layout.data_offset(),
            layout.block_bits(),
        ))
    }

    fn lookup(&self, pattern: &str) -> Result<u32> {
        self.table
            .codepoint_of(pattern)
            .map_err(|_| FrameError::UnknownPattern {
                table: self.table.name().to_string(),
                pattern: pattern.to_string(),
            })
    }
}

/// Encode `text` with `table` and return the bit-string.
pub fn encode_as_binary(table: &GlyphTable, text: &str) -> Result<String> {
    FrameCodec::new(table).encode(text).map(Signal::into_bits)
}

/// Decode a bit-string with `table` and return the text.
pub fn decode_binary(table: &GlyphTable, bits: &str) -> Result<String> {
    FrameCodec::new(table).decode(bits).map(Message::into_text)
}

fn advance(stage: &mut DecodeStage, next: DecodeStage) {
    debug_assert!(next > *stage);
    trace!(from = ?*stage, to = ?next, "decode stage");
    *stage = next;
}

fn strip_front(
    blocks: &mut Blocks<'_>,
    count: usize,
    expected: &str,
    boundary: Boundary,
) -> Result<()> {
    for found in 0..count {
        match blocks.next() {
            Some(block) if block == expected => {}
            _ => {
                return Err(FrameError::Framing {
                    boundary,
                    expected: count,
                    found,
                })
            }
        }
    }
    Ok(())
}

fn strip_back(
    blocks: &mut Blocks<'_>,
    count: usize,
    expected: &str,
    boundary: Boundary,
) -> Result<()> {
    for found in 0..count {
        match blocks.next_back() {
            Some(block) if block == expected => {}
            _ => {
                return Err(FrameError::Framing {
                    boundary,
                    expected: count,
                    found,
                })
            }
        }
    }
    Ok(())
}
