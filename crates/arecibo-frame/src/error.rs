use std::fmt;

use arecibo_glyph::GlyphError;

use crate::radix::Radix;

/// The closed set of failure kinds a caller has to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Characters outside the expected charset or codepoints outside the table.
    InvalidInput,
    /// Bit length is not a whole number of blocks, or too few blocks.
    MalformedSignal,
    /// A silence, meter, or gap block does not match its fixed pattern.
    InvalidFraming,
    /// A data unit's pattern has no entry in the table.
    UnknownPattern,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::MalformedSignal => "malformed_signal",
            ErrorKind::InvalidFraming => "invalid_framing",
            ErrorKind::UnknownPattern => "unknown_pattern",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Framing run checked while stripping a signal down to its data units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    LeadingSilence,
    TrailingSilence,
    LeadingMeter,
    TrailingMeter,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Boundary::LeadingSilence => "leading silence",
            Boundary::TrailingSilence => "trailing silence",
            Boundary::LeadingMeter => "leading meter",
            Boundary::TrailingMeter => "trailing meter",
        })
    }
}

/// Errors that can occur while encoding, decoding, or converting signals.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The text contains codepoints the table has no glyph for (sorted, de-duplicated).
    #[error(
        "string contains codepoints outside the {table} table: {}",
        join_codepoints(.codepoints)
    )]
    UnsupportedCodepoints { table: String, codepoints: Vec<u32> },

    /// A radix input contains a character outside its digit set.
    #[error(
        "{radix} data may only contain {}; found {found:?} at position {position}",
        .radix.allowed()
    )]
    InvalidCharacter {
        radix: Radix,
        found: char,
        position: usize,
    },

    /// The framed signal for this text would exceed the configured maximum.
    #[error("message of {chars} characters would need {bits} bits (max {max})")]
    MessageTooLong { chars: usize, bits: usize, max: usize },

    /// The bit length is not a whole number of blocks.
    #[error("input is {bits} bits long, but must be an even multiple of {block_bits} bits")]
    LengthNotMultiple { bits: usize, block_bits: usize },

    /// The signal cannot hold silence, meter, one data unit, meter, and silence.
    #[error(
        "input is {blocks} {block_bits}-bit blocks long but must have at least {min_blocks} \
         (silence, meter, one data unit, meter, silence)"
    )]
    TooFewBlocks {
        blocks: usize,
        block_bits: usize,
        min_blocks: usize,
    },

    /// The signal exceeds the configured maximum length.
    #[error("input is {bits} bits long (max {max})")]
    SignalTooLong { bits: usize, max: usize },

    /// Hexadecimal conversion needs whole 4-bit groups.
    #[error("input is {bits} bits long, which is not a multiple of 4")]
    NotNibbleAligned { bits: usize },

    /// A silence or meter run ended early.
    #[error("insufficient {boundary}: found {found} of {expected} blocks")]
    Framing {
        boundary: Boundary,
        expected: usize,
        found: usize,
    },

    /// A data unit is not followed by its all-zero gap.
    #[error("data unit {unit} is not followed by {width} zero bits")]
    BadSeparator { unit: usize, width: usize },

    /// A data unit's pattern is not in the table.
    #[error("bit pattern not in the {table} table: {pattern}")]
    UnknownPattern { table: String, pattern: String },

    /// The pattern maps to a codepoint that is not a Unicode scalar value.
    #[error("bit pattern maps to codepoint {codepoint}, which is not a character")]
    NotACharacter { codepoint: u32 },

    /// A table lookup failed.
    #[error("glyph table error: {0}")]
    Glyph(#[from] GlyphError),
}

impl FrameError {
    /// The failure kind, for exhaustive handling without string matching.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FrameError::UnsupportedCodepoints { .. }
            | FrameError::InvalidCharacter { .. }
            | FrameError::MessageTooLong { .. } => ErrorKind::InvalidInput,
            FrameError::LengthNotMultiple { .. }
            | FrameError::TooFewBlocks { .. }
            | FrameError::SignalTooLong { .. }
            | FrameError::NotNibbleAligned { .. } => ErrorKind::MalformedSignal,
            FrameError::Framing { .. } | FrameError::BadSeparator { .. } => {
                ErrorKind::InvalidFraming
            }
            FrameError::UnknownPattern { .. } | FrameError::NotACharacter { .. } => {
                ErrorKind::UnknownPattern
            }
            FrameError::Glyph(GlyphError::UnknownPattern { .. }) => ErrorKind::UnknownPattern,
            FrameError::Glyph(_) => ErrorKind::InvalidInput,
        }
    }
}

fn join_codepoints(codepoints: &[u32]) -> String {
    codepoints
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framing_message_names_boundary_and_count() {
        let err = FrameError::Framing {
            boundary: Boundary::TrailingMeter,
            expected: 7,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "insufficient trailing meter: found 3 of 7 blocks"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidFraming);
    }

    #[test]
    fn unsupported_codepoints_are_listed() {
        let err = FrameError::UnsupportedCodepoints {
            table: "USCII-5x7-ENGLISH-C0".to_string(),
            codepoints: vec![5000, 6000],
        };
        assert!(err.to_string().ends_with("table: 5000, 6000"));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn glyph_errors_map_to_kinds() {
        let unknown = FrameError::from(GlyphError::UnknownPattern {
            table: "T".into(),
            pattern: "01".into(),
        });
        assert_eq!(unknown.kind(), ErrorKind::UnknownPattern);

        let unsupported = FrameError::from(GlyphError::UnsupportedCodepoint {
            codepoint: 300,
            table_size: 128,
        });
        assert_eq!(unsupported.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn kind_strings_are_stable() {
        assert_eq!(ErrorKind::MalformedSignal.to_string(), "malformed_signal");
        assert_eq!(ErrorKind::UnknownPattern.as_str(), "unknown_pattern");
    }
}
