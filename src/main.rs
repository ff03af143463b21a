use std::fs::File;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use memmap2::Mmap;
use tracing_subscriber::EnvFilter;

use heavykeeper_sketch::{TopK, DEFAULT_CAPACITY, DEFAULT_DECAY};

/// Reports the most frequent whitespace-separated words of the input.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of top items to report
    #[arg(short = 'k', long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Counters per row
    #[arg(short, long, default_value_t = 1024)]
    width: u32,

    /// Number of rows
    #[arg(short, long, default_value_t = 4)]
    depth: u32,

    /// Decay base, in (0, 1)
    #[arg(long, default_value_t = DEFAULT_DECAY)]
    decay: f64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Read from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the counter table and candidate heap after the report
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = TopK::builder(args.width, args.depth)
        .capacity(args.capacity)
        .decay(args.decay);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut topk = builder.build()?;

    match &args.input {
        Some(path) => {
            let file = File::open(path)?;
            // SAFETY: the mapping is read-only and dropped before returning
            let mmap = unsafe { Mmap::map(&file)? };
            for word in mmap.split(u8::is_ascii_whitespace).filter(|w| !w.is_empty()) {
                topk.add(word, 1)?;
            }
            tracing::debug!(path = %path.display(), bytes = mmap.len(), "input consumed");
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                for word in line.split_whitespace() {
                    topk.add(word, 1)?;
                }
            }
        }
    }

    for node in topk.top_k() {
        println!("{} {}", String::from_utf8_lossy(&node.item), node.count);
    }

    if args.dump {
        eprint!("{}", topk);
    }

    Ok(())
}
