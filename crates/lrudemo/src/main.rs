//! LRU cache demo - replays a sequence of get/put operations

mod ops;

use anyhow::{Context, Result};
use clap::Parser;
use lrucache::LruCache;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ops::{Op, DEFAULT_SCRIPT};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of entries)
    #[arg(short, long, default_value_t = 2)]
    capacity: usize,

    /// Operation to run: get:KEY, put:KEY:VALUE or print (repeatable)
    #[arg(short, long = "op")]
    ops: Vec<Op>,

    /// Trace every eviction
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("lrucache=trace,lrudemo=debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut cache = LruCache::new(args.capacity)
        .with_context(|| format!("cannot build cache with capacity {}", args.capacity))?;
    info!("Cache capacity: {}", cache.capacity());

    let script: &[Op] = if args.ops.is_empty() {
        &DEFAULT_SCRIPT
    } else {
        &args.ops
    };

    let stdout = std::io::stdout();
    ops::run(&mut cache, script, &mut stdout.lock())?;

    info!("Done: {} of {} entries resident", cache.len(), cache.capacity());
    Ok(())
}
