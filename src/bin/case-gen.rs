use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use carpet_format::config::{GenArgs, GenConfig};
use carpet_format::generator::{generate_case, make_rng, write_batch};

fn main() -> Result<()> {
    let args = GenArgs::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = GenConfig::from_args(args)?;
    let mut rng = make_rng(config.seed);

    match &config.out_dir {
        Some(dir) => {
            let manifest = write_batch(dir, config.cases, &config.profile, &mut rng)?;
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        None => {
            let doc = generate_case(&config.profile, &mut rng);
            io::stdout()
                .write_all(doc.to_string().as_bytes())
                .context("Failed to write case to stdout")?;
        }
    }

    Ok(())
}
