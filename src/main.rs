use std::{io, process::ExitCode};

use clap::Parser;
use tplx::cli::{Arguments, ExitStatus};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();

    if let Err(err) = init_tracing(args.verbose()) {
        eprintln!("Error: {}", err);
        return ExitStatus::Error.into();
    }

    match tplx::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let directive = if verbose { "tplx=debug" } else { "tplx=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
