use anyhow::{Context, Result};
use std::io;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(true) => exit(0),
        Ok(false) => exit(1),
        Err(e) => {
            eprintln!("error: {e:?}");
            exit(2);
        }
    }
}

fn run() -> Result<bool> {
    let stdin = io::stdin();
    foogrep::scan_reader(stdin.lock()).context("failed to scan standard input")
}
