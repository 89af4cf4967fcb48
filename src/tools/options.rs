/// huffbits options - structs and impls filled in from command line args
use std::{fmt::Display, fmt::Formatter};

/// Random input length used when none is given.
pub const DEFAULT_RANDOM_LEN: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the bytes to encode come from
pub enum InputSource {
    File(String),
    Text(String),
    Random { len: usize, seed: Option<u64> },
}
impl Display for InputSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "file {}", path),
            InputSource::Text(text) => write!(f, "{} bytes of text", text.len()),
            InputSource::Random { len, seed: Some(seed) } => {
                write!(f, "{} random bytes (seed {})", len, seed)
            }
            InputSource::Random { len, seed: None } => write!(f, "{} random bytes", len),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Defines all user settable options to control program behavior
pub struct HuffOpts {
    /// Input to encode
    pub source: InputSource,
    /// Optional file to write the bit string to
    pub output: Option<String>,
    /// Log every code in the table, not just the summary
    pub show_codes: bool,
    /// Count frequencies both sequentially and in parallel and compare the two
    pub compare_counts: bool,
    /// Encode into a buffer of at most this many bits
    pub max_bits: Option<usize>,
}
