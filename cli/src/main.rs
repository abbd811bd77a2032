//! Entry point for the `css-to-ts` binary.

use std::io;

use clap::Parser;
use dsfr_cli::{init_tracing, run, Args};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
