use clap::Parser;
use std::io;

use ascii_projector::animation::{cancel_on_ctrlc, CancellationToken};
use ascii_projector::cli::{self, AppError, Args};

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(cli::log_level(args.verbose))
        .parse_default_env()
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let token = CancellationToken::new();
    cancel_on_ctrlc(&token)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(args, &token, &mut out)
}
