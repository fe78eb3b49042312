//! Calculator CLI
//!
//! Replays a CSV tape of keystrokes through a calculator session and writes
//! the display after every key.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- keys.csv > transcript.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use calculator_engine::{EngineError, Result, TapeRunner};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(EngineError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let stdout = io::stdout();
    let handle = stdout.lock();

    let mut runner = TapeRunner::new();
    runner.run(reader, handle)?;

    Ok(())
}
