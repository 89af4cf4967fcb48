//! Static Huffman prefix-code builder and bit-string encoder.
//!
//! Given a table of byte frequencies, huffbits builds an optimal prefix code, derives a
//! per-byte code table from it and encodes a byte stream into a sequence of '0'/'1'
//! symbols, one symbol per bit.
//!
//! The stages run in order:
//! - Frequency count: `tools::freq_count` (single pass, or chunked across a rayon pool).
//! - Tree build: `huffman_coding::tree::TreeBuilder` merges the two lightest nodes until one remains.
//! - Code table: `huffman_coding::code_table::CodeTable` walks the tree, left = '0', right = '1'.
//! - Encoding: `huffman_coding::encoder` concatenates the codes of each input byte.
//!
//! Basic usage from the command line:
//!
//! `$> huffbits input.txt -o input.bits`
//!
//! There is no decoder and the output is not packed into bytes.
//!
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::HuffError;

/// One count per byte value, indexed by the byte.
pub type Frequencies = [u64; 256];
