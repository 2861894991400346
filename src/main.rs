mod commands;

use clap::Parser;
use length::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

/// Convert and add lengths.
#[derive(clap::Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Opts {
    /// A level of verbosity, and can be used multiple times
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbose: i32,
    /// Round printed values to this many fractional digits
    #[clap(short, long, global = true)]
    precision: Option<u32>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Parser)]
enum Command {
    Convert(commands::convert::Opts),
    Add(commands::add::Opts),
    /// List all supported units
    Units,
}

fn main() {
    let opts: Opts = Opts::parse();
    let max_level = match opts.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(filter::filter_fn(move |m| {
            m.target().starts_with("length") && m.level() <= &max_level
        }))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(opts) {
        tracing::error!(%err, "failed");
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> Result<(), Error> {
    match opts.command {
        Command::Convert(cmd) => commands::convert::execute(cmd, opts.precision),
        Command::Add(cmd) => commands::add::execute(cmd, opts.precision),
        Command::Units => {
            commands::units::execute();
            Ok(())
        }
    }
}
