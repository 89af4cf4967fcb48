use std::time::{Duration, Instant};

use log::{debug, info};

use crate::huffman_coding::code_table::CodeTable;
use crate::Frequencies;

/// Records how long each named stage of a run took.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    last: Instant,
    marks: Vec<(String, Duration)>,
}

impl Timer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            marks: vec![],
        }
    }

    /// Close the current stage under `label` and return its duration.
    pub fn mark(&mut self, label: &str) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.marks.push((label.to_string(), elapsed));
        debug!("{}: {:.6} sec", label, elapsed.as_secs_f64());
        elapsed
    }

    pub fn marks(&self) -> &[(String, Duration)] {
        &self.marks
    }

    pub fn total(&self) -> Duration {
        self.last - self.start
    }

    /// Log every stage and the total.
    pub fn report(&self) {
        for (label, elapsed) in &self.marks {
            info!("{:>18}: {:.6} sec", label, elapsed.as_secs_f64());
        }
        info!("{:>18}: {:.6} sec", "total", self.total().as_secs_f64());
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// The first `limit` non-zero counts, in byte order.
pub fn first_nonzero(freqs: &Frequencies, limit: usize) -> Vec<(u8, u64)> {
    freqs
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .take(limit)
        .map(|(byte, &count)| (byte as u8, count))
        .collect()
}

/// Log the first ten non-zero byte frequencies.
pub fn report_freqs(freqs: &Frequencies, label: &str) {
    info!("{}: First 10 non zero byte frequencies:", label);
    for (byte, count) in first_nonzero(freqs, 10) {
        info!("Byte {:>3}: {}", byte, count);
    }
}

/// Log a summary of the code table, and every code if asked.
pub fn report_codes(table: &CodeTable, freqs: &Frequencies, show_all: bool) {
    let symbols: u64 = freqs.iter().sum();
    let bits = table.weighted_len(freqs);
    info!(
        "{} codes, longest {} bits, {:.3} bits per symbol",
        table.len(),
        table.max_code_len(),
        if symbols == 0 { 0.0 } else { bits as f64 / symbols as f64 }
    );
    if show_all {
        for (byte, code) in table.iter() {
            info!("Byte {:>3} ({:>8}): {}", byte, freqs[byte as usize], code);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timer_marks_test() {
        let mut timer = Timer::new();
        timer.mark("input");
        timer.mark("count");
        let labels: Vec<&str> = timer.marks().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["input", "count"]);
        let sum: Duration = timer.marks().iter().map(|(_, d)| *d).sum();
        assert_eq!(sum, timer.total());
    }

    #[test]
    fn first_nonzero_test() {
        let mut freqs = [0_u64; 256];
        for byte in (0..256).step_by(10) {
            freqs[byte] = byte as u64 + 1;
        }
        let first = first_nonzero(&freqs, 10);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0], (0, 1));
        assert_eq!(first[9], (90, 91));
        assert!(first_nonzero(&[0; 256], 10).is_empty());
    }
}
