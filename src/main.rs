use std::io;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transmission_methods::{Section, demo};

/// Serial vs parallel transmission, explained on the console.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print only this example (1-9)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=9))]
    section: Option<u8>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "error" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={level}", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let sections = match cli.section {
        Some(number) => vec![Section::from_number(number)?],
        None => Section::ALL.to_vec(),
    };
    debug!(count = sections.len(), "Rendering demo");

    demo::render(&mut io::stdout().lock(), &sections)?;
    Ok(())
}
