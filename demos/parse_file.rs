use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use ini_config::{Config, ParseSettings};

/// Parse an INI file and print it in canonical form
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the INI file
    #[arg(value_name = "FILE", default_value = "example.ini")]
    path: PathBuf,

    /// Ignore blank lines between assignments
    #[arg(long)]
    skip_blank_lines: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    let settings = ParseSettings::new().skip_blank_lines(args.skip_blank_lines);

    let file = File::open(&args.path)
        .with_context(|| format!("could not read {}", args.path.display()))?;

    match Config::from_reader_with(&file, &settings) {
        Ok(config) => {
            info!(
                "Parsed {} section(s) from {}",
                config.len(),
                args.path.display()
            );
            println!("{}", config);
            Ok(())
        }
        Err(e) => {
            error!("Could not parse ini file: {}", e);
            if !e.partial().is_empty() {
                info!("Parsed before the failure:\n{}", e.partial());
            }
            Err(e.into())
        }
    }
}
