use std::process;

use clap::Parser;
use huffpack::cli::{self, Cli};
use huffpack::if_tracing;

if_tracing! {
    use tracing_subscriber::{EnvFilter, fmt};
}

fn main() {
    if_tracing! {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    let cli = Cli::parse();
    if let Err(e) = cli::execute_command(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
