//! Command-line entry point.
//!
//! Usage: `boatyard [LAYOUT.json]`. Without a layout the sample yard is used.

use boatyard_app::{crane_report, position_report};
use boatyard_core::{Yard, YardLayout, YardResult};
use std::path::PathBuf;
use std::process::ExitCode;

fn load_yard(path: Option<PathBuf>) -> YardResult<Yard> {
    match path {
        Some(path) => {
            log::info!("Loading layout from {}", path.display());
            Yard::from_layout(YardLayout::load(&path)?)
        }
        None => {
            log::info!("No layout given, using the sample yard");
            Ok(Yard::sample())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Boatyard");

    let mut yard = match load_yard(std::env::args_os().nth(1).map(PathBuf::from)) {
        Ok(yard) => yard,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("boatyard: {}", err);
            return ExitCode::FAILURE;
        }
    };

    print!("{}", position_report(&yard));

    let ids: Vec<String> = yard.boats().iter().map(|b| b.id.clone()).collect();
    for id in ids {
        if yard.select(&id).is_ok() {
            println!();
            print!("{}", crane_report(&yard));
        }
    }

    ExitCode::SUCCESS
}
