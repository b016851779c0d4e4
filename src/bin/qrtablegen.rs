use std::process::ExitCode;

use clap::Parser;
use rust_qr_ecc::config::{RunConfig, log_filter};
use rust_qr_ecc::tools::run;
use tracing_subscriber::EnvFilter;

/// Convert a QR error correction characteristics table into a static header.
#[derive(Parser)]
#[command(name = "qrtablegen", version, about, long_about = None)]
struct Cli {
    /// Tab-separated table file
    #[arg(long)]
    input: Option<String>,
    /// Header file to write, or "-" for standard output
    #[arg(long)]
    output: Option<String>,
    /// Header guard token, inserted verbatim
    #[arg(long = "header-guard", alias = "header_guard")]
    header_guard: Option<String>,
}

fn init_logging() {
    // Logs go to stderr so "--output -" stays clean.
    let filter = EnvFilter::try_new(log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = RunConfig::new(cli.input, cli.output, cli.header_guard).and_then(|config| run(&config));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qrtablegen: {err}");
            ExitCode::FAILURE
        }
    }
}
