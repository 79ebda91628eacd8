// ===== iotcompare/src/main.rs =====
use clap::{Parser, Subcommand};
use iotcompare::catalog::Catalog;
use iotcompare::error::IotResult;
use std::path::PathBuf;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON array of extra protocol records appended to the built-in four
    #[arg(global = true, long)]
    catalog: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare every protocol under one scenario
    Compare(cmd::compare::CompareArgs),
    /// Show the step-by-step estimate for one protocol
    Explain(cmd::explain::ExplainArgs),
    /// List protocol parameters
    Catalog,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> IotResult<()> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::default().extend_from_file(path)?,
        None => Catalog::default(),
    };

    match cli.command {
        Commands::Compare(args) => cmd::compare::run(args, &catalog),
        Commands::Explain(args) => cmd::explain::run(args, &catalog),
        Commands::Catalog => {
            reports::print_catalog(&catalog);
            Ok(())
        }
    }
}
