//! Self-synchronizing framing for Arecibo-style glyph signals.
//!
//! Every signal is a string of `'0'`/`'1'` characters laid out in blocks of
//! `width * height + width` bits:
//! - `height` blocks of leading silence (all 0)
//! - `width` leading meter blocks (`width * height` ones, `width` zeros)
//! - one block per character: its glyph followed by a `width`-bit zero gap
//! - `height` trailing meter blocks
//! - `width` blocks of trailing silence (all 1)
//!
//! A receiver can recover the glyph geometry from the silence and meter runs
//! alone. Decoding is all-or-nothing: the first framing violation aborts.

pub mod blocks;
pub mod codec;
pub mod error;
pub mod layout;
pub mod radix;
pub mod signal;
pub mod validate;

pub use blocks::Blocks;
pub use codec::{
    decode_binary, encode_as_binary, CodecConfig, DecodeStage, FrameCodec,
    DEFAULT_MAX_SIGNAL_BITS,
};
pub use error::{Boundary, ErrorKind, FrameError, Result};
pub use layout::SignalLayout;
pub use radix::{
    binary_to_hex, from_binary, hex_to_binary, strip_whitespace, to_binary, wrap, Radix,
};
pub use signal::{Message, Signal, Unit};
pub use validate::{ensure_binary_length, ensure_charset, ensure_codepoints_valid};
