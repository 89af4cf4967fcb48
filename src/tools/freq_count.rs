use rayon::prelude::*;

use crate::Frequencies;

/// Inputs larger than this are counted in parallel.
const PAR_THRESHOLD: usize = 64_000;
/// 16k is pretty much the sweet spot for chunk size.
const CHUNK_SIZE: usize = 16_000;

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> Frequencies {
    if data.len() > PAR_THRESHOLD {
        freqs_par(data)
    } else {
        freqs_seq(data)
    }
}

/// Single pass count on the current thread.
pub fn freqs_seq(data: &[u8]) -> Frequencies {
    let mut freqs = [0_u64; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Count each chunk on the rayon pool, then sum the partial tables.
pub fn freqs_par(data: &[u8]) -> Frequencies {
    data.par_chunks(CHUNK_SIZE)
        .fold(
            || [0_u64; 256],
            |mut freqs, chunk| {
                chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                freqs
            },
        )
        .reduce(
            || [0_u64; 256],
            |mut s, f| {
                s.iter_mut().zip(&f).for_each(|(a, b)| *a += b);
                s
            },
        )
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn count_text_test() {
        let freqs = freqs_seq("Hello, world!".as_bytes());
        assert_eq!(freqs[b'l' as usize], 3);
        assert_eq!(freqs[b'o' as usize], 2);
        assert_eq!(freqs[b'H' as usize], 1);
        assert_eq!(freqs.iter().sum::<u64>(), 13);
    }

    #[test]
    fn empty_input_test() {
        assert_eq!(freqs(&[]), [0_u64; 256]);
        assert_eq!(freqs_par(&[]), [0_u64; 256]);
    }

    #[test]
    fn par_matches_seq_test() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut data = vec![0_u8; 250_000];
        rng.fill(&mut data[..]);
        let seq = freqs_seq(&data);
        assert_eq!(freqs_par(&data), seq);
        assert_eq!(freqs(&data), seq);
        assert_eq!(seq.iter().map(|&c| c as usize).sum::<usize>(), data.len());
    }
}
