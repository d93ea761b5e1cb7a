//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use log::{debug, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffcode::tools::cli::huffopts_init;
use huffcode::tools::freq_count::freqs;
use huffcode::tools::tree_dump::TreeDump;
use huffcode::{build_tree, code_table, CodeTable, Result};

fn main() -> Result<()> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let options = huffopts_init();
    let text = options.read_input()?;
    debug!("Read {} chars of input", text.chars().count());

    let freqs = freqs(&text);
    let table = if freqs.is_empty() {
        CodeTable::default()
    } else {
        let tree = build_tree(&freqs, options.max_merges)?;
        if options.show_tree {
            print!("{}", TreeDump(&tree.root));
        }
        code_table(&tree.root)
    };

    print!("{}", table);
    info!("Done.\n");
    Ok(())
}
