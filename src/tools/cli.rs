use std::fmt::{Display, Formatter};
use std::fs;

use clap::Parser;
use log::info;

use crate::error::Result;
use crate::huffman_coding::huffman::MAX_MERGES;

/// Text used when nothing is given on the command line
pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn from_level(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    File(String),
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => write!(f, "text {:?}", text),
            Input::File(path) => write!(f, "file {}", path),
        }
    }
}

#[derive(Debug)]
pub struct HuffOpts {
    /// Source of the text to build the code table for
    pub input: Input,
    /// Merge budget passed to the tree builder
    pub max_merges: usize,
    /// Print the pre-order tree dump before the table
    pub show_tree: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            input: Input::Text(SAMPLE_TEXT.to_string()),
            max_merges: MAX_MERGES,
            show_tree: false,
            verbose: Verbosity::Info,
        }
    }

    /// Fetch the input text, reading the file if one was named.
    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            Input::Text(text) => Ok(text.clone()),
            Input::File(path) => Ok(fs::read_to_string(path)?),
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Build a Huffman code table for a piece of text",
    long_about = "
    Counts the characters of the input, merges them into a Huffman tree and prints the
    numeric code derived for every character. Without any input the sample sentence
    \"The quick brown fox jumps over the lazy dog\" is used."
)]
pub struct Args {
    /// Text to build the table for
    #[clap()]
    text: Option<String>,

    /// Read the text from a file instead
    #[clap(short = 'f', long = "file")]
    file: Option<String>,

    /// Maximum merge counter before the tree is rejected
    #[clap(short = 'm', long = "max-merges", default_value_t = MAX_MERGES)]
    max_merges: usize,

    /// Dump the tree in pre-order before printing the table
    #[clap(short = 't', long = "tree")]
    tree: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        // A file wins over text given on the command line
        if let Some(path) = args.file {
            opts.input = Input::File(path);
        } else if let Some(text) = args.text {
            opts.input = Input::Text(text);
        }
        opts.max_merges = args.max_merges;
        opts.show_tree = args.tree;
        opts.verbose = Verbosity::from_level(args.v);
        opts
    }
}

/// Parse the process arguments into options and set the log level from them.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Huffcode Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Getting input from the {}", opts.input);
    info!("Merge budget set to {}", opts.max_merges);
    if opts.show_tree {
        info!("Dumping the tree")
    };
    info!("---- Huffcode Initialization End ----\n");
    opts
}
