//! tenantctl — multi-tenant manifest provisioning.

use clap::Parser;
use tenantctl::cli::{self, Cli};
use tenantctl::core::layout::Layout;

fn main() {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    let result = match args.command {
        Some(command) => cli::dispatch(command, &Layout::new(args.root)),
        None => cli::print_help(),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
