//! Command-line host for a faceted collection.
//!
//! Loads card attributes from a JSON array into an in-memory surface, replays
//! a command script against the engine and prints what a user would have
//! seen: every status announcement, then the final visible order.
//!
//! # Usage
//!
//! ```text
//! faceted-collection cards.json --script session.txt --config timings.toml
//! ```
//!
//! `RUST_LOG=faceted_collection=debug` shows the pipeline as it runs.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use faceted_collection::app::{parse_script, ScriptStep};
use faceted_collection::domain::ItemAttributes;
use faceted_collection::observability::init_tracing;
use faceted_collection::surface::{MemorySurface, SurfaceOp};
use faceted_collection::{attach, handle_command, Config, Engine};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Filter, search and sort a card collection from the command line."
)]
struct Cli {
    /// JSON array of card attributes (id, category, title, date, popularity, ...).
    #[arg(value_name = "ITEMS")]
    items: PathBuf,

    /// Command script to replay (category, sort, type, clear, wait, settle, teardown).
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Path to the TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> faceted_collection::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    init_tracing(&config);

    let span = tracing::debug_span!("cli", items = %cli.items.display());
    let _guard = span.enter();

    let source = std::fs::read_to_string(&cli.items)?;
    let attributes: Vec<ItemAttributes> = serde_json::from_str(&source)?;
    tracing::debug!(count = attributes.len(), "items loaded");

    let steps = match &cli.script {
        Some(path) => parse_script(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    let mut engine = attach(MemorySurface::new(attributes), &config);
    for step in &steps {
        match step {
            ScriptStep::Command(command) => {
                handle_command(&mut engine, command);
            }
            ScriptStep::Wait(elapsed) => engine.advance(*elapsed),
            ScriptStep::Settle => engine.settle(),
        }
    }
    engine.settle();

    print_report(&engine);
    Ok(())
}

fn print_report(engine: &Engine<MemorySurface>) {
    for op in engine.surface().ops() {
        if let SurfaceOp::Status(message) = op {
            println!("announce: {message}");
        }
    }

    let filter = engine.filter();
    println!(
        "filter: category={} search={:?} sort={}",
        filter.category, filter.search_term, filter.sort_key
    );

    println!("visible ({}):", engine.visible().len());
    for id in engine.visible() {
        let title = engine
            .store()
            .get(id)
            .map_or("", |item| item.title.as_str());
        println!("  {id}\t{title}");
    }
}
