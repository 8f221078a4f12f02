use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rpncalc_core::errors::*;
use rpncalc_core::{Config, Engine, Frontend, DEFAULT_INVALID_INPUT_LIMIT, DEFAULT_STACK_LIMIT};

mod cli;
mod display;

use cli::Cli;

#[derive(Parser)]
#[command(name = "rpncalc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reverse Polish notation calculator", long_about = None)]
struct Args {
    /// Maximum number of elements on the stack
    #[arg(long, default_value_t = DEFAULT_STACK_LIMIT)]
    stack_limit: usize,

    /// Consecutive invalid inputs before the calculator shuts down
    #[arg(long, default_value_t = DEFAULT_INVALID_INPUT_LIMIT)]
    invalid_input_limit: usize,

    /// Show this file instead of the built-in help text
    #[arg(long)]
    help_file: Option<PathBuf>,

    /// Skip the greeting
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        report_error(e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::new(args.stack_limit, args.invalid_input_limit)?;
    info!(?config, "starting calculator");

    let mut engine = Engine::with_config(config);
    let mut cli = Cli::new(args.help_file)?;
    if !args.no_banner {
        cli.banner();
    }

    cli.run(&mut engine)?;
    Ok(())
}

fn report_error(e: Error) {
    eprintln!("error: {}", e);
    for cause in e.iter().skip(1) {
        eprintln!("caused by: {}", cause);
    }
}
