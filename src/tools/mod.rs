//! The tools module provides the collaborators that feed the huffman core and report on it.
//!
//! The tools are:
//! - cli: Command line interface, parsed with clap.
//! - options: Settings that control a run, filled in by cli.
//! - input: Acquire the bytes to encode, from a file, literal text or a random generator.
//! - freq_count: Frequency count of the input, sequential or across a rayon pool.
//! - report: Stage timer and log summaries of the frequency and code tables.
//!
pub mod cli;
pub mod freq_count;
pub mod input;
pub mod options;
pub mod report;
