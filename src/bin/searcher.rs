extern crate wordlist;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing::debug;

use wordlist::{logging, Dictionary, PackedTrie};

/// Read words on the standard input and tell,
/// for each of them, if it is in the packed trie.
///
/// Each answer is written as `word<TAB>true` or `word<TAB>false`.
#[derive(Debug, Parser)]
#[command(name = "wordlist-search", version)]
struct Args {
    /// Packed trie file, as written by wordlist-compile.
    packed: PathBuf,

    #[arg(long, env = logging::LOG_ENV, default_value = "info")]
    log_level: String
}

fn search(args: &Args) -> wordlist::Result<()> {
    let packed = PackedTrie::open(&args.packed)?;
    debug!(records = packed.len(), "packed trie loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = BufWriter::new(stdout.lock());

    for word in Dictionary::new(stdin.lock()) {
        let word = word?;
        writeln!(stdout, "{}\t{}", word, packed.contains(word.as_bytes()))?;
    }

    stdout.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(message) = logging::init(&args.log_level) {
        eprintln!("{}", message);
        exit(2);
    }

    if let Err(error) = search(&args) {
        eprintln!("Can't search in \"{}\" ({})", args.packed.display(), error);
        exit(1);
    }
}
