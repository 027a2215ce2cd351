//! drivers
//!
//! Prints the names of the people old enough to drive.
//!
//! # Usage
//!
//! ```bash
//! # Built-in roster (John 17, Jane 15)
//! cargo run --bin drivers
//!
//! # Custom roster and age, appending to a file
//! cargo run --bin drivers -- --people people.json --minimum-age 18 --output drivers.txt
//!
//! # Pipeline logs go to stderr
//! RUST_LOG=drivers_sample=debug cargo run --bin drivers
//! ```

use anyhow::Context;
use clap::Parser;
use drivers_sample::sink::LineSink;
use drivers_sample::{Roster, source};
use std::fs::OpenOptions;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "drivers")]
#[command(about = "Prints the names of the people old enough to drive")]
struct Cli {
    /// JSON array of {"name", "age"} records (defaults to the built-in roster)
    #[arg(long)]
    people: Option<PathBuf>,

    /// Minimum age to drive
    #[arg(long, default_value_t = 17)]
    minimum_age: u32,

    /// Append names to this file instead of printing them
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drivers=info,drivers_sample=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let people = match &cli.people {
        Some(path) => source::load_people(path)?,
        None => source::tutorial_people(),
    };
    let roster = Roster::new(people, cli.minimum_age);

    let written = match &cli.output {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let mut sink = LineSink::new(BufWriter::new(file));
            let written = roster.print_drivers(&mut sink)?;
            sink.into_inner()?;
            written
        }
        None => {
            let mut sink = LineSink::new(io::stdout().lock());
            let written = roster.print_drivers(&mut sink)?;
            sink.into_inner()?;
            written
        }
    };

    tracing::info!(
        written,
        minimum_age = roster.minimum_age(),
        "printed drivers"
    );
    Ok(())
}
