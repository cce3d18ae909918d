/// Fixed-size windows over a bit-string, consumable from either end.
///
/// Windows are plain offset arithmetic over the input; nothing is copied.
/// The input must be ASCII (every bit one byte), which the decoder
/// guarantees by checking the binary charset first.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    signal: &'a str,
    block_bits: usize,
    front: usize,
    back: usize,
}

impl<'a> Blocks<'a> {
    /// Split `signal` into `signal.len() / block_bits` windows. Trailing bits
    /// that do not fill a window are ignored.
    pub fn new(signal: &'a str, block_bits: usize) -> Self {
        debug_assert!(signal.is_ascii());
        let count = signal.len().checked_div(block_bits).unwrap_or(0);
        Self {
            signal,
            block_bits,
            front: 0,
            back: count,
        }
    }

    fn window(&self, index: usize) -> &'a str {
        let start = index * self.block_bits;
        &self.signal[start..start + self.block_bits]
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let block = self.window(self.front);
        self.front += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Blocks<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.window(self.back))
    }
}

impl ExactSizeIterator for Blocks<'_> {}
