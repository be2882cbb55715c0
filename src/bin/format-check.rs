use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use carpet_format::config::CheckArgs;
use carpet_format::validate_document;

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read standard input")?;
    Ok(content)
}

fn main() -> ExitCode {
    env_logger::init();
    let _args = CheckArgs::parse();

    let content = match read_stdin() {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match validate_document(&content) {
        Ok(doc) => {
            log::debug!("input is valid ({} records)", doc.count());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
