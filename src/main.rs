//! Command-line entry point.
//!
//! Parses `key=value` arguments into a [`Config`], installs tracing, renders
//! the configured screen and prints it to stdout.
//!
//! ```text
//! dishboard screen=inventory category=Spices
//! dishboard screen=tables tab=3 plain=true width=100
//! dishboard export_fixtures=~/dishboard.json
//! ```

use chrono::Utc;
use dishboard::{export_fixtures, initialize, observability, Config, Result, Screen};
use std::process::ExitCode;

const USAGE: &str = "usage: dishboard [key=value ...]";

fn print_help() {
    println!("{USAGE}");
    println!();
    println!("screens:");
    for screen in Screen::ALL {
        println!("  {:<10} {}", screen.title().to_lowercase(), screen.tagline());
    }
    println!();
    println!("options: {}", dishboard::CONFIG_KEYS.join(", "));
}

fn run(args: &[String]) -> Result<()> {
    let config = Config::from_args(args)?;
    observability::init_tracing(&config);

    let now = Utc::now();

    if let Some(path) = &config.export_fixtures {
        let written = export_fixtures(path, now)?;
        println!("Exported fixtures to {}", written.display());
        return Ok(());
    }

    let dashboard = initialize(&config, now)?;
    print!("{}", dashboard.render());
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "dishboard failed");
            eprintln!("dishboard: {e}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
