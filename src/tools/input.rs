use std::fs;

use log::{error, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::options::InputSource;
use crate::HuffError;

/// Get the bytes to encode from wherever the options point.
pub fn acquire(source: &InputSource) -> Result<Vec<u8>, HuffError> {
    match source {
        InputSource::File(path) => read_file(path),
        InputSource::Text(text) => {
            info!("Using {} bytes of text from the command line", text.len());
            Ok(text.as_bytes().to_vec())
        }
        InputSource::Random { len, seed } => {
            let data = random_bytes(*len, *seed);
            info!("Generated {} random bytes", data.len());
            Ok(data)
        }
    }
}

/// Read the whole file into memory.
pub fn read_file(path: &str) -> Result<Vec<u8>, HuffError> {
    match fs::read(path) {
        Ok(data) => {
            info!("Loaded {} bytes from {}", data.len(), path);
            Ok(data)
        }
        Err(e) => {
            error!("Cannot read from the file {}", path);
            Err(e.into())
        }
    }
}

/// Uniformly random bytes. A seed makes the output repeatable.
pub fn random_bytes(len: usize, seed: Option<u64>) -> Vec<u8> {
    let mut buf = vec![0_u8; len];
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed).fill(&mut buf[..]),
        None => rand::thread_rng().fill(&mut buf[..]),
    }
    buf
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seeded_random_repeats_test() {
        let a = random_bytes(1_000, Some(99));
        let b = random_bytes(1_000, Some(99));
        assert_eq!(a.len(), 1_000);
        assert_eq!(a, b);
        assert_ne!(a, random_bytes(1_000, Some(100)));
    }

    #[test]
    fn text_source_test() {
        let data = acquire(&InputSource::Text("aaab".to_string())).unwrap();
        assert_eq!(data, b"aaab");
    }

    #[test]
    fn missing_file_test() {
        let result = acquire(&InputSource::File("no/such/file.txt".to_string()));
        assert!(matches!(result, Err(HuffError::Io(_))));
    }

    #[test]
    fn file_source_test() {
        let path = std::env::temp_dir().join("huffbits_input_test.txt");
        fs::write(&path, "abracadabra").unwrap();
        let data = read_file(path.to_str().unwrap()).unwrap();
        assert_eq!(data, b"abracadabra");
        fs::remove_file(&path).unwrap();
    }
}
