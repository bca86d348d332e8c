mod adapters;
mod cli;
mod core;
mod error;
mod logging;

use clap::Parser;

use crate::{cli::Args, error::AppResult};

fn main() -> AppResult<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    if args.bridge {
        adapters::bridge::run(args)
    } else {
        let proceed = adapters::console::run(args)?;
        if !proceed {
            // A vetoed submission maps to a non-zero exit for scripted callers.
            std::process::exit(1);
        }
        Ok(())
    }
}
