//! Transmit example: encodes a message, damages a copy in flight, and decodes both.
//!
//! Run with:
//!   cargo run --example transmit -p arecibo -- "Hello, Arecibo"

use arecibo::frame::ErrorKind;
use arecibo::glyph::uscii_5x7;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello, Arecibo".to_string());

    let codec = arecibo::codec();
    let signal = codec.encode(&text)?;
    println!(
        "{} data is {} binary digits long",
        uscii_5x7().name(),
        signal.len()
    );
    println!("hex: {}", signal.to_hex()?);

    let message = codec.decode(signal.bits())?;
    for unit in message.units() {
        println!(
            "  #{:<3} codepoint {:>3} at bit {}",
            unit.position, unit.codepoint, unit.offset
        );
    }
    println!("received: {}", message.text());

    // Flip the first bit of the leading silence.
    let mut damaged = signal.into_bits();
    damaged.replace_range(0..1, "1");
    match codec.decode(&damaged) {
        Ok(message) => println!("damaged copy decoded unexpectedly: {}", message.text()),
        Err(err) if err.kind() == ErrorKind::InvalidFraming => {
            println!("damaged copy rejected: {err}");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
