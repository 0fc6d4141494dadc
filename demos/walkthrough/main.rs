//! A guided tour of `pairmap` that logs every step.
//!
//! Runs the conflict rules of `BiMap` and `WeakBiMap` against small example
//! maps, then optionally loads a JSON file of string pairs:
//!
//! ```json
//! { "entries": [["en", "hello"], ["fr", "bonjour"]], "force": false }
//! ```

use std::{path::PathBuf, rc::Rc};

use clap::Parser;
use pairmap::{BiMap, Number, SetOptions, WeakBiMap};

mod config;
mod logging;

#[derive(Debug, Parser)]
#[clap(author, version, about = "A guided tour of pairmap bidirectional maps", long_about = None)]
struct Args {
    /// Path to a JSON file of pairs to load after the tour
    #[clap(short, long)]
    entries: Option<PathBuf>,

    /// Force every pair from the entries file, even if the file says otherwise
    #[clap(short, long)]
    force: bool,

    /// Enable verbose logging
    #[clap(short, long)]
    verbose: bool,
}

/// Values of the strong map tour, which mixes numbers and text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Cell {
    Number(Number),
    Text(&'static str),
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

fn main() {
    // Parse CLI args
    let args = Args::parse();

    // Initialize logging
    if let Err(error) = logging::enable_logger(args.verbose) {
        eprintln!("Failed to set up logging: {error}");
        std::process::exit(1);
    }

    if let Err(error) = run(&args) {
        log::error!("{}", error);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    tour_strong()?;
    tour_weak()?;

    if let Some(path) = &args.entries {
        let file = config::EntriesFile::load(path)?;
        let options = SetOptions {
            force: file.force || args.force,
        };

        let mut map = BiMap::new();
        for (key, value) in file.entries {
            log::debug!("Setting {:?} -> {:?} with {:?}", key, value, options);
            map.set_with(key, value, options)?;
        }
        log::info!("Loaded {} pairs from {}", map.len(), path.display());
        log::info!("Forward: {:?}", map);
        log::info!("Inverse: {:?}", map.inverse());
    }
    Ok(())
}

fn tour_strong() -> Result<(), pairmap::Error> {
    log::info!("Building a BiMap of numbers and text");
    let mut map: BiMap<Number, Cell> = BiMap::new();
    map.set(1.into(), 2.into())?
        .set((-0.0).into(), 3.into())?
        .set(2.into(), Cell::Text("3"))?;
    log::info!("Contents: {:?}", map);
    log::info!("0 is a key: {}", map.has(&Number::from(0)));
    log::info!("Key for 3: {:?}", map.inverse().get(&Cell::from(3)));

    match map.set(4.into(), 2.into()) {
        Ok(_) => log::warn!("Setting 4 -> 2 unexpectedly succeeded"),
        Err(error) => log::info!("Setting 4 -> 2: {}", error),
    }

    map.set_with(4.into(), 2.into(), SetOptions::forced())?;
    log::info!("After forcing 4 -> 2: {:?}", map);

    map.set(8.into(), 10.into())?;
    map.set_with(2.into(), 2.into(), SetOptions::forced())?;
    log::info!("After forcing 2 -> 2: {:?}", map);
    Ok(())
}

fn tour_weak() -> Result<(), pairmap::Error> {
    log::info!("Building a WeakBiMap of named objects");
    let [a, b, c, d, e, f] = ["a", "b", "c", "d", "e", "f"].map(Rc::new);
    let mut map = WeakBiMap::from_entries([(&a, &b), (&c, &d), (&b, &e)])?;

    if let Err(error) = map.set(&f, &b) {
        log::info!("Setting f -> b: {}", error);
    }
    map.set_with(&f, &b, SetOptions::forced())?;
    log::info!(
        "After forcing f -> b: a -> {:?}, f -> {:?}",
        map.get(&a),
        map.get(&f)
    );

    map.set_with(&b, &b, SetOptions::forced())?;
    log::info!("After forcing b -> b: b -> {:?}", map.get(&b));

    drop(d);
    log::info!("Dropped d. c is bound: {}", map.has(&c));
    log::info!("Pruned {} dead pairs", map.prune());
    Ok(())
}
