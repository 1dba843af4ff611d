#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use redadeg::{cli, dispatch, utils};

#[macro_use]
extern crate redadeg;

/// Sample sensor packages, as received from the wearable.
const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    for (workout_type, data) in PACKAGES {
        dlog!("package code={workout_type} fields={}", data.len());
        let training = dispatch::read_package(workout_type, data)?;
        println!("{}", training.info().render());
    }

    Ok(())
}
