extern crate wordlist;

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing::info;

use wordlist::packed::record::MAX_OFFSET;
use wordlist::{logging, EncoderLimits, PackedWordList};

/// Compile a word list file into a packed trie file.
#[derive(Debug, Parser)]
#[command(name = "wordlist-compile", version)]
struct Args {
    /// Word list file, one word per line.
    words: PathBuf,

    /// Where the packed records are written.
    output: PathBuf,

    /// Largest offset (and number of records) accepted, at most 8388607.
    #[arg(long, env = "WORDLIST_MAX_OFFSET", default_value_t = MAX_OFFSET)]
    max_offset: u32,

    #[arg(long, env = logging::LOG_ENV, default_value = "info")]
    log_level: String
}

fn compile(args: &Args) -> wordlist::Result<()> {
    let mut list = PackedWordList::with_limits(EncoderLimits::new(args.max_offset));
    let lines = wordlist::load_path(&mut list, &args.words)?;

    let packed = list.into_packed().unwrap_or_default();
    packed.save(&args.output)?;

    info!(lines, records = packed.len(), bytes = packed.size_in_bytes(), "packed trie written");
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(message) = logging::init(&args.log_level) {
        eprintln!("{}", message);
        exit(2);
    }

    if let Err(error) = compile(&args) {
        eprintln!("Can't compile \"{}\" ({})", args.words.display(), error);
        exit(1);
    }
}
