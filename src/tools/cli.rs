use super::options::{HuffOpts, InputSource, DEFAULT_RANDOM_LEN};
use clap::{ArgGroup, Parser};
use log::info;

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Build a Huffman code for the input and encode it as a '0'/'1' bit string",
    long_about = None)]
#[clap(group(ArgGroup::new("input").required(true).args(&["filename", "text", "random"])))]
pub struct Args {
    /// Filename of file to encode
    #[clap()]
    filename: Option<String>,

    /// Encode this text instead of a file
    #[clap(short = 't', long = "text")]
    text: Option<String>,

    /// Encode random bytes instead of a file, 1000000 unless a count is given
    #[clap(short = 'r', long = "random")]
    random: Option<Option<usize>>,

    /// Seed for the random input, for repeatable runs
    #[clap(long = "seed", requires = "random")]
    seed: Option<u64>,

    /// Write the encoded bit string to this file
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Log the code of every symbol
    #[clap(short = 'c', long = "codes")]
    codes: bool,

    /// Count frequencies sequentially and in parallel, and compare
    #[clap(long = "compare")]
    compare: bool,

    /// Encode into a fixed buffer of this many bits, stopping when it is full
    #[clap(short = 'm', long = "max-bits")]
    max_bits: Option<usize>,

    /// Sets verbosity. -v 1 is silent, -v 4 and up is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Parse the command line, set the log level and return the options.
pub fn init_huff_opts() -> HuffOpts {
    let args = Args::parse();

    // Set the log level
    match args.v {
        1 => log::set_max_level(log::LevelFilter::Off),
        2 => log::set_max_level(log::LevelFilter::Error),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    let opts = opts_from_args(args);

    info!("---- huffbits Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Getting input from {}", opts.source);
    if let Some(path) = &opts.output {
        info!("Writing bits to {}", path)
    };
    if let Some(max_bits) = opts.max_bits {
        info!("Output limited to {} bits", max_bits)
    };
    if opts.compare_counts {
        info!("Comparing sequential and parallel counts")
    };
    info!("---- huffbits Initialization End ----\n");
    opts
}

/// Copy command line stuff from clap's structure into our internal one.
pub fn opts_from_args(args: Args) -> HuffOpts {
    let source = match (args.filename, args.text) {
        (Some(path), _) => InputSource::File(path),
        (None, Some(text)) => InputSource::Text(text),
        // The input group makes --random the only case left.
        (None, None) => InputSource::Random {
            len: args.random.flatten().unwrap_or(DEFAULT_RANDOM_LEN),
            seed: args.seed,
        },
    };
    HuffOpts {
        source,
        output: args.output,
        show_codes: args.codes,
        compare_counts: args.compare,
        max_bits: args.max_bits,
    }
}
