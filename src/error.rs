//! Error type shared by the huffman core and the tools that feed it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    /// Every entry in the frequency table was zero, so there is no tree to build.
    #[error("Empty alphabet: every byte frequency is zero")]
    EmptyAlphabet,

    /// The code table has no entry for this byte.
    #[error("No code for byte {0:#04x}")]
    MissingCode(u8),

    /// A fixed-size output buffer filled up before the input was fully encoded.
    #[error("Buffer exhausted: wrote {written} of {required} bits, skipped {skipped} bytes")]
    BufferExhausted {
        /// Bits written before encoding stopped
        written: usize,
        /// Bits the full encoding needs
        required: usize,
        /// Input bytes without a code seen before encoding stopped
        skipped: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
