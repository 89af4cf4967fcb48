//! Encodes a byte stream as a sequence of '0'/'1' symbols using a code table.
//!
//! Bytes without a code are skipped and counted, not treated as fatal. The first miss for each byte
//! value is logged as a warning; repeats only show at debug level.

use log::{debug, warn};

use super::code_table::CodeTable;
use crate::HuffError;

/// Result of an unbounded encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// One '0' or '1' per bit, in input order.
    pub bits: String,
    pub bit_count: usize,
    /// Input bytes dropped because they had no code.
    pub skipped: usize,
}

/// Counts from an encode into a caller supplied buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    pub bit_count: usize,
    pub skipped: usize,
}

/// Exact number of bits the input encodes to. Bytes without a code add nothing.
pub fn encoded_len(input: &[u8], table: &CodeTable) -> usize {
    input.iter().map(|&byte| table.code_len(byte)).sum()
}

/// Encode the whole input. The output is allocated once, at its exact final size.
pub fn encode(input: &[u8], table: &CodeTable) -> Encoded {
    let mut bits = String::with_capacity(encoded_len(input, table));
    let mut misses = Misses::new();

    for (pos, &byte) in input.iter().enumerate() {
        match table.lookup(byte) {
            Ok(code) => bits.push_str(code),
            Err(e) => misses.record(pos, byte, &e),
        }
    }

    Encoded {
        bit_count: bits.len(),
        bits,
        skipped: misses.count,
    }
}

/// Encode into a fixed-size buffer of b'0'/b'1' symbols. Only whole codes are written. If the next
/// code does not fit, encoding stops and BufferExhausted reports how many bits made it into `out`
/// and how many bytes were skipped up to that point.
pub fn encode_into(input: &[u8], table: &CodeTable, out: &mut [u8]) -> Result<EncodeStats, HuffError> {
    let mut written = 0;
    let mut misses = Misses::new();

    for (pos, &byte) in input.iter().enumerate() {
        let code = match table.lookup(byte) {
            Ok(code) => code,
            Err(e) => {
                misses.record(pos, byte, &e);
                continue;
            }
        };
        let end = written + code.len();
        if end > out.len() {
            let required = encoded_len(input, table);
            warn!(
                "Output buffer of {} bits is full at input byte {}, {} bits needed",
                out.len(),
                pos,
                required
            );
            return Err(HuffError::BufferExhausted {
                written,
                required,
                skipped: misses.count,
            });
        }
        out[written..end].copy_from_slice(code.as_bytes());
        written = end;
    }

    Ok(EncodeStats {
        bit_count: written,
        skipped: misses.count,
    })
}

/// Tally of skipped bytes.
struct Misses {
    count: usize,
    seen: [bool; 256],
}

impl Misses {
    fn new() -> Self {
        Misses {
            count: 0,
            seen: [false; 256],
        }
    }

    fn record(&mut self, pos: usize, byte: u8, e: &HuffError) {
        self.count += 1;
        if self.seen[byte as usize] {
            debug!("Skipping input byte {}: {}", pos, e);
        } else {
            self.seen[byte as usize] = true;
            warn!("Skipping input byte {}: {}", pos, e);
        }
    }
}
