#![forbid(unsafe_code)]

//! zsweep: delete Zone.Identifier marker files under the current directory.

use clap::Parser;

mod cli_app;

fn main() {
    let args = cli_app::Cli::parse();
    if let Err(e) = cli_app::run(&args) {
        eprintln!("zsweep: {e}");
        std::process::exit(e.exit_code());
    }
}
