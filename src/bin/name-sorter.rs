//! CLI tool to sort a file of personal names.
//!
//! Usage:
//!   name-sorter <names.txt>
//!   name-sorter <names.txt> -o <sorted.txt>
//!
//! Sorted names are printed to stdout and written to the output file
//! (default: sorted-names-list.txt). Logs go to stderr.

use std::process;
use std::rc::Rc;

use clap::Parser;
use name_sorter::{
    DEFAULT_OUTPUT_FILE, LocalFileSystem, RunConfig, RunStatus, StdoutWriter, run_sorter,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Sort names by last name, then by given names.
#[derive(Parser)]
#[command(name = "name-sorter")]
struct Cli {
    /// File containing one name per line
    file: String,

    /// Write the sorted names to this file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: String,

    /// Show step-by-step progress on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose { "debug" } else { cli.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = RunConfig::new(&cli.file, &cli.output);
    let fs = Rc::new(LocalFileSystem::new());
    let console = Rc::new(StdoutWriter::new());

    match run_sorter(&config, fs, console) {
        Ok(RunStatus::Completed) => {
            if cli.verbose {
                eprintln!("Output:   {}", config.output_file().display());
            }
        }
        Ok(RunStatus::InvalidConfig) => process::exit(2),
        Err(e) => {
            if e.is_configuration() {
                error!(error = %e, "pipeline is wired incorrectly");
            }
            eprintln!("We're sorry, but an error occurred.");
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
