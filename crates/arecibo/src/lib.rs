//! Arecibo-style signals for plain text.
//!
//! Each character becomes a small bitmap (glyph) from a fixed table. Glyphs are
//! concatenated with zero gaps and framed by silence and meter runs so a
//! receiver can recover the bitmap geometry without knowing the table.
//!
//! # Crate Structure
//!
//! - [`glyph`]: Glyph tables, the reverse index, and the built-in USCII-5x7-ENGLISH-C0 table
//! - [`frame`]: Signal layout, validation, radix conversion, and the frame codec
//!
//! The free functions at the crate root use the built-in table.
//!
//! ```
//! let bits = arecibo::encode_as_binary("Hi").unwrap();
//! assert_eq!(arecibo::decode_binary(&bits).unwrap(), "Hi");
//!
//! let hex = arecibo::binary_to_hex(&bits).unwrap();
//! assert_eq!(arecibo::hex_to_binary(&hex).unwrap(), bits);
//! ```

use arecibo_frame::FrameCodec;
use arecibo_glyph::{uscii_5x7, GlyphTable};

/// Re-export glyph table types.
pub mod glyph {
    pub use arecibo_glyph::*;
}

/// Re-export framing types.
pub mod frame {
    pub use arecibo_frame::*;
}

pub use arecibo_frame::{
    binary_to_hex, hex_to_binary, ErrorKind, FrameError, Message, Radix, Result, Signal, Unit,
};

/// The built-in USCII-5x7-ENGLISH-C0 table.
pub fn table() -> &'static GlyphTable {
    uscii_5x7()
}

/// A codec over the built-in table.
pub fn codec() -> FrameCodec<'static> {
    FrameCodec::new(uscii_5x7())
}

/// Encode text as a framed bit-string of `'0'`/`'1'` characters.
pub fn encode_as_binary(text: &str) -> Result<String> {
    arecibo_frame::encode_as_binary(uscii_5x7(), text)
}

/// Decode a framed bit-string back into text.
pub fn decode_binary(bits: &str) -> Result<String> {
    arecibo_frame::decode_binary(uscii_5x7(), bits)
}

/// Glyph columns of the built-in table.
pub fn width() -> usize {
    uscii_5x7().width()
}

/// Glyph rows of the built-in table.
pub fn height() -> usize {
    uscii_5x7().height()
}

/// Number of codepoints the built-in table supports.
pub fn table_size() -> usize {
    uscii_5x7().len()
}
