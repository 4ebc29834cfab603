extern crate wordlist;

use std::path::{Path, PathBuf};
use std::process::exit;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{error, info};

use wordlist::{logging, ArrayWordList, Dictionary, Information, NullWordList, PackedWordList, SetWordList, WordList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    Null,
    Array,
    Set,
    Packed
}

/// Compare the load, add and query time of the word list variants.
#[derive(Debug, Parser)]
#[command(name = "wordlist", version)]
struct Args {
    /// Word list file, one word per line.
    file: PathBuf,

    /// Variants to test (all of them by default).
    #[arg(short, long, value_enum)]
    variant: Vec<Variant>,

    /// Seed used to shuffle the words before adding them.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// How many times each measure is repeated.
    #[arg(short, long, default_value_t = 1)]
    repeat: u32,

    #[arg(long, env = logging::LOG_ENV, default_value = "info")]
    log_level: String
}

/// A single measure, averaged over all the repetitions.
struct Measure<T> {
    time: Duration,
    result: T
}

fn measure<T, F: FnMut() -> T>(repeat: u32, mut block: F) -> Measure<T> {
    let repeat = repeat.max(1);
    let start = Instant::now();

    let mut result = block();
    for _ in 1..repeat {
        result = block();
    }

    Measure {
        time: start.elapsed() / repeat,
        result
    }
}

/// Display a duration with a unit adapted to its magnitude.
fn format_duration(time: Duration) -> String {
    let seconds = time.as_secs_f64();

    if seconds > 10.0 {
        format!("{:.0} sec", seconds)
    } else if seconds > 1e-3 {
        format!("{:.3} sec", seconds)
    } else if seconds > 9e-6 {
        format!("{:.3} ms", seconds * 1e3)
    } else if seconds > 1e-9 {
        format!("{:.3} \u{3bc}s", seconds * 1e6)
    } else {
        String::from("0.000 sec")
    }
}

fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["bytes", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

fn test_variant<L: WordList + Information + Default>(name: &str, path: &Path, words: &[String], repeat: u32) -> wordlist::Result<()> {
    println!("TESTING: {} {} words", name, words.len());

    let load = measure(repeat, || {
        let mut list = L::default();
        wordlist::load_path(&mut list, path).map(|_| list)
    });
    let loaded = load.result?;
    println!("   Memory used: {}", format_bytes(loaded.size_in_bytes()));
    println!("         Words: {}", loaded.words());
    println!("     Load Time: {}", format_duration(load.time));

    let mut list = L::default();
    let add = measure(repeat, || -> wordlist::Result<()> {
        list.begin()?;
        for word in words {
            list.insert(word.as_bytes())?;
        }
        list.finish()
    });
    add.result?;
    println!("      Add Time: {}", format_duration(add.time));

    let query = measure(repeat, || words.iter().all(|word| list.contains(word.as_bytes())));
    let per_word = query.time / (words.len().max(1) as u32);
    println!("    Query Time: {}", format_duration(per_word));
    println!("        Result: {}", query.result);

    info!(variant = name, found = query.result, "variant tested");
    Ok(())
}

fn run(args: &Args) -> wordlist::Result<()> {
    let mut words = Dictionary::open(&args.file)?
        .into_iter()
        .collect::<std::io::Result<Vec<String>>>()?;
    words.shuffle(&mut StdRng::seed_from_u64(args.seed));

    let variants = if args.variant.is_empty() {
        vec![Variant::Null, Variant::Array, Variant::Set, Variant::Packed, Variant::Null]
    } else {
        args.variant.clone()
    };

    for variant in variants {
        match variant {
            Variant::Null => test_variant::<NullWordList>("null", &args.file, &words, args.repeat)?,
            Variant::Array => test_variant::<ArrayWordList>("array", &args.file, &words, args.repeat)?,
            Variant::Set => test_variant::<SetWordList>("set", &args.file, &words, args.repeat)?,
            Variant::Packed => test_variant::<PackedWordList>("packed", &args.file, &words, args.repeat)?,
        }
        println!();
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(message) = logging::init(&args.log_level) {
        eprintln!("{}", message);
        exit(2);
    }

    if let Err(error) = run(&args) {
        error!(%error, file = %args.file.display(), "benchmark failed");
        eprintln!("Can't test \"{}\" ({})", args.file.display(), error);
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!("12 sec", format_duration(Duration::from_secs(12)));
        assert_eq!("1.500 sec", format_duration(Duration::from_millis(1500)));
        assert_eq!("0.002 sec", format_duration(Duration::from_millis(2)));
        assert_eq!("0.500 ms", format_duration(Duration::from_micros(500)));
        assert_eq!("3.000 \u{3bc}s", format_duration(Duration::from_micros(3)));
        assert_eq!("0.000 sec", format_duration(Duration::from_nanos(0)));
    }

    #[test]
    fn bytes() {
        assert_eq!("12 bytes", format_bytes(12));
        assert_eq!("1.5 KB", format_bytes(1536));
        assert_eq!("2.0 MB", format_bytes(2 * 1024 * 1024));
    }
}
