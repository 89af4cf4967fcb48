//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs;

use log::{debug, error, info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffbits::huffman_coding::code_table::CodeTable;
use huffbits::huffman_coding::encoder::{encode, encode_into, EncodeStats};
use huffbits::huffman_coding::tree::TreeBuilder;
use huffbits::tools::cli::init_huff_opts;
use huffbits::tools::freq_count::{freqs, freqs_par, freqs_seq};
use huffbits::tools::input::acquire;
use huffbits::tools::options::HuffOpts;
use huffbits::tools::report::{report_codes, report_freqs, Timer};
use huffbits::HuffError;

fn main() -> Result<(), HuffError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Logging unavailable: {}", e);
    }

    let opts = init_huff_opts();

    let result = run(&opts);
    if let Err(e) = &result {
        error!("{}", e);
    }

    info!("Done.\n");
    result
}

/// Count, build the code table, encode, and optionally write the bits out.
fn run(opts: &HuffOpts) -> Result<(), HuffError> {
    let mut timer = Timer::new();

    let data = acquire(&opts.source)?;
    timer.mark("input");

    let counts = if opts.compare_counts {
        let seq = freqs_seq(&data);
        timer.mark("count (seq)");
        let par = freqs_par(&data);
        timer.mark("count (par)");
        report_freqs(&seq, "Seq");
        report_freqs(&par, "Par");
        if seq != par {
            warn!("Sequential and parallel frequency counts differ");
        }
        seq
    } else {
        let counts = freqs(&data);
        timer.mark("count");
        report_freqs(&counts, "Freqs");
        counts
    };

    let mut builder = TreeBuilder::new();
    let table = {
        let tree = builder.build(&counts)?;
        info!(
            "Tree built: {} leaves, depth {}",
            tree.leaf_count(),
            tree.depth()
        );
        CodeTable::from_tree(&tree)
    };
    debug!("{} nodes in the tree arena", builder.node_count());
    timer.mark("codes");
    report_codes(&table, &counts, opts.show_codes);

    let (bits, stats) = match opts.max_bits {
        Some(max_bits) => {
            let mut buf = vec![0_u8; max_bits];
            match encode_into(&data, &table, &mut buf) {
                Ok(stats) => {
                    buf.truncate(stats.bit_count);
                    (buf, stats)
                }
                Err(HuffError::BufferExhausted {
                    written,
                    required,
                    skipped,
                }) => {
                    warn!("Encoding stopped early: {} of {} bits written", written, required);
                    buf.truncate(written);
                    let stats = EncodeStats {
                        bit_count: written,
                        skipped,
                    };
                    (buf, stats)
                }
                Err(e) => return Err(e),
            }
        }
        None => {
            let encoded = encode(&data, &table);
            let stats = EncodeStats {
                bit_count: encoded.bit_count,
                skipped: encoded.skipped,
            };
            (encoded.bits.into_bytes(), stats)
        }
    };
    timer.mark("encode");

    info!(
        "Encoded {} bytes into {} bits ({} bytes skipped)",
        data.len(),
        stats.bit_count,
        stats.skipped
    );
    if !data.is_empty() {
        info!(
            "Ratio: {:.3} bits per input byte",
            stats.bit_count as f64 / data.len() as f64
        );
    }

    if let Some(path) = &opts.output {
        fs::write(path, &bits)?;
        info!("Wrote {} bits to {}", bits.len(), path);
        timer.mark("write");
    }

    timer.report();
    Ok(())
}
