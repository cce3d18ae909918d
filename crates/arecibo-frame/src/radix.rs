use std::fmt;
use std::str::FromStr;

use crate::error::{FrameError, Result};
use crate::validate::ensure_charset;

const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

const NIBBLES: [&str; 16] = [
    "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111", "1000", "1001", "1010",
    "1011", "1100", "1101", "1110", "1111",
];

/// Text representation of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    /// One `'0'`/`'1'` character per bit.
    #[default]
    Binary,
    /// One hex digit per four bits, uppercase on output, either case on input.
    Hexadecimal,
}

impl Radix {
    /// Whether `c` is a digit of this radix.
    pub fn allows(self, c: char) -> bool {
        match self {
            Radix::Binary => matches!(c, '0' | '1'),
            Radix::Hexadecimal => c.is_ascii_hexdigit(),
        }
    }

    /// Human-readable digit set, used in diagnostics.
    pub fn allowed(self) -> &'static str {
        match self {
            Radix::Binary => "0 and 1",
            Radix::Hexadecimal => "0-9 and A-F (or a-f)",
        }
    }

    pub fn bits_per_digit(self) -> usize {
        match self {
            Radix::Binary => 1,
            Radix::Hexadecimal => 4,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Radix::Binary => "binary",
            Radix::Hexadecimal => "hexadecimal",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown radix {0:?} (expected binary or hexadecimal)")]
pub struct ParseRadixError(String);

impl FromStr for Radix {
    type Err = ParseRadixError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "2" => Ok(Radix::Binary),
            "hexadecimal" | "hex" | "16" => Ok(Radix::Hexadecimal),
            _ => Err(ParseRadixError(s.to_string())),
        }
    }
}

/// Convert a bit-string to uppercase hex, four bits per digit.
pub fn binary_to_hex(bits: &str) -> Result<String> {
    ensure_charset(bits, Radix::Binary)?;
    if bits.len() % 4 != 0 {
        return Err(FrameError::NotNibbleAligned { bits: bits.len() });
    }

    Ok(bits
        .as_bytes()
        .chunks_exact(4)
        .map(|nibble| {
            let value = nibble
                .iter()
                .fold(0usize, |acc, bit| (acc << 1) | usize::from(*bit == b'1'));
            HEX_DIGITS[value]
        })
        .collect())
}

/// Convert hex digits (either case) to a bit-string, four bits per digit.
pub fn hex_to_binary(hex: &str) -> Result<String> {
    let mut bits = String::with_capacity(hex.len() * 4);
    for (position, c) in hex.chars().enumerate() {
        match c.to_digit(16) {
            Some(value) => bits.push_str(NIBBLES[value as usize]),
            None => {
                return Err(FrameError::InvalidCharacter {
                    radix: Radix::Hexadecimal,
                    found: c,
                    position,
                })
            }
        }
    }
    Ok(bits)
}

/// Drop every whitespace character, so pasted or wrapped input parses.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalize user input in `radix` into a bit-string.
pub fn to_binary(input: &str, radix: Radix) -> Result<String> {
    let compact = strip_whitespace(input);
    match radix {
        Radix::Binary => {
            ensure_charset(&compact, Radix::Binary)?;
            Ok(compact)
        }
        Radix::Hexadecimal => hex_to_binary(&compact),
    }
}

/// Render a bit-string in `radix`.
pub fn from_binary(bits: &str, radix: Radix) -> Result<String> {
    match radix {
        Radix::Binary => {
            ensure_charset(bits, Radix::Binary)?;
            Ok(bits.to_string())
        }
        Radix::Hexadecimal => binary_to_hex(bits),
    }
}

/// Break `text` into lines of `width` characters. Zero disables wrapping.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
