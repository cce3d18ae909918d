use arecibo_glyph::GlyphTable;

use crate::error::{FrameError, Result};
use crate::layout::SignalLayout;
use crate::radix::Radix;

/// Fail if any character of `text` has no glyph in `table`.
///
/// Every offending codepoint is reported once, in ascending order.
pub fn ensure_codepoints_valid(text: &str, table: &GlyphTable) -> Result<()> {
    let mut unsupported: Vec<u32> = text
        .chars()
        .map(u32::from)
        .filter(|codepoint| !table.contains_codepoint(*codepoint))
        .collect();
    if unsupported.is_empty() {
        return Ok(());
    }

    unsupported.sort_unstable();
    unsupported.dedup();
    Err(FrameError::UnsupportedCodepoints {
        table: table.name().to_string(),
        codepoints: unsupported,
    })
}

/// Fail unless `bits` is a whole number of blocks and at least the minimum
/// framed length. Returns the block count.
pub fn ensure_binary_length(bits: &str, layout: &SignalLayout) -> Result<usize> {
    let block_bits = layout.block_bits();
    if bits.len() % block_bits != 0 {
        return Err(FrameError::LengthNotMultiple {
            bits: bits.len(),
            block_bits,
        });
    }

    let blocks = bits.len() / block_bits;
    if blocks < layout.min_blocks() {
        return Err(FrameError::TooFewBlocks {
            blocks,
            block_bits,
            min_blocks: layout.min_blocks(),
        });
    }
    Ok(blocks)
}

/// Fail on the first character of `text` that is not a digit of `radix`.
pub fn ensure_charset(text: &str, radix: Radix) -> Result<()> {
    match text.chars().enumerate().find(|(_, c)| !radix.allows(*c)) {
        Some((position, found)) => Err(FrameError::InvalidCharacter {
            radix,
            found,
            position,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use arecibo_glyph::{uscii_5x7, Dimensions};

    use super::*;
    use crate::error::ErrorKind;

    fn layout_5x7() -> SignalLayout {
        SignalLayout::new(Dimensions::new(5, 7).unwrap())
    }

    #[test]
    fn supported_text_passes() {
        let table = uscii_5x7();
        assert!(ensure_codepoints_valid("", table).is_ok());
        assert!(ensure_codepoints_valid("Hello, World!\n", table).is_ok());
    }

    #[test]
    fn offending_codepoints_sorted_and_deduplicated() {
        let text: String = [6000u32, 5000, 65, 5000]
            .iter()
            .map(|cp| char::from_u32(*cp).unwrap())
            .collect();
        let err = ensure_codepoints_valid(&text, uscii_5x7()).unwrap_err();
        match &err {
            FrameError::UnsupportedCodepoints { codepoints, .. } => {
                assert_eq!(codepoints, &vec![5000, 6000]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn first_unsupported_codepoint_is_table_size() {
        let text = char::from_u32(128).unwrap().to_string();
        assert!(ensure_codepoints_valid(&text, uscii_5x7()).is_err());
    }

    #[test]
    fn length_must_be_whole_blocks() {
        let layout = layout_5x7();
        let bits = "0".repeat(40 * 3 + 1);
        let err = ensure_binary_length(&bits, &layout).unwrap_err();
        assert!(matches!(
            err,
            FrameError::LengthNotMultiple {
                bits: 121,
                block_bits: 40
            }
        ));
        assert_eq!(err.kind(), ErrorKind::MalformedSignal);
    }

    #[test]
    fn length_must_reach_minimum_blocks() {
        let layout = layout_5x7();
        let err = ensure_binary_length(&"0".repeat(40 * 24), &layout).unwrap_err();
        assert!(matches!(
            err,
            FrameError::TooFewBlocks {
                blocks: 24,
                min_blocks: 25,
                ..
            }
        ));
        assert!(ensure_binary_length("", &layout).is_err());
        assert_eq!(ensure_binary_length(&"0".repeat(40 * 25), &layout).unwrap(), 25);
    }

    #[test]
    fn charset_reports_first_offender() {
        assert!(ensure_charset("010110", Radix::Binary).is_ok());
        assert!(ensure_charset("09afAF", Radix::Hexadecimal).is_ok());
        assert!(matches!(
            ensure_charset("0110x1y", Radix::Binary),
            Err(FrameError::InvalidCharacter {
                found: 'x',
                position: 4,
                ..
            })
        ));
        assert!(ensure_charset("12", Radix::Binary).is_err());
    }
}
