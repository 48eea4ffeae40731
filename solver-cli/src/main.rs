mod audio;
mod config;
mod dataset;
mod frames;
mod ic;
mod record;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Heat rod and plucked string integrators
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record the plucked string at a microphone into a WAV file
    Record(record::RecordArgs),
    /// Dump frames of a run as JSON lines for an external plotter
    Frames(frames::FramesArgs),
    /// Generate (u^t -> u^{t+k}) training pairs from randomized runs
    Dataset(dataset::DatasetArgs),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Record(args) => record::execute(args),
        Commands::Frames(args) => frames::execute(args),
        Commands::Dataset(args) => dataset::execute(args),
    }
}
