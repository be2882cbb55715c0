//! Configuration management for the format tools.
//!
//! Handles:
//! - Command-line argument parsing for both binaries
//! - Merging generator flags over a TOML profile

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::generator::{GenProfile, QueryMode};

/// Command-line arguments for the validator. It takes input on stdin only.
#[derive(Debug, Parser)]
#[command(name = "format-check")]
#[command(about = "Check that stdin holds a count, that many 4-integer lines and a 2-integer line")]
#[command(version)]
pub struct CheckArgs {}

/// Command-line arguments for the case generator
#[derive(Debug, Parser)]
#[command(name = "case-gen")]
#[command(about = "Generate random test cases in the checked format")]
#[command(version)]
pub struct GenArgs {
    /// Profile file with generation parameters
    #[arg(long, help = "TOML profile (defaults to <config dir>/carpet-format/profile.toml)")]
    pub profile: Option<PathBuf>,

    #[arg(long, help = "Body records per case")]
    pub count: Option<usize>,

    #[arg(long, help = "Corners are drawn from [0, COORD_MAX)")]
    pub coord_max: Option<i32>,

    #[arg(long, help = "Smallest rectangle extent")]
    pub min_len: Option<i32>,

    #[arg(long, help = "Largest rectangle extent")]
    pub max_len: Option<i32>,

    #[arg(long, value_enum, help = "Where to place the query point")]
    pub query: Option<QueryMode>,

    #[arg(long, help = "Seed for reproducible output")]
    pub seed: Option<u64>,

    #[arg(
        long,
        requires = "out_dir",
        help = "Number of cases to write (default 1, needs --out-dir)"
    )]
    pub cases: Option<usize>,

    /// Write numbered .in/.out files here instead of printing one case
    #[arg(long, help = "Directory for test_data_N.in/.out files")]
    pub out_dir: Option<PathBuf>,

    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Resolved generator configuration
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub profile: GenProfile,
    pub seed: Option<u64>,
    pub cases: usize,
    pub out_dir: Option<PathBuf>,
}

impl GenConfig {
    /// Resolve parsed arguments against the profile file, if any
    pub fn from_args(args: GenArgs) -> Result<Self> {
        let base = match args.profile {
            Some(path) => GenProfile::load(&path)?,
            None => match GenProfile::default_path().filter(|path| path.is_file()) {
                Some(path) => {
                    log::debug!("Using profile {}", path.display());
                    GenProfile::load(&path)?
                }
                None => GenProfile::default(),
            },
        };

        let profile = GenProfile {
            count: args.count.unwrap_or(base.count),
            coord_max: args.coord_max.unwrap_or(base.coord_max),
            min_len: args.min_len.unwrap_or(base.min_len),
            max_len: args.max_len.unwrap_or(base.max_len),
            query: args.query.unwrap_or(base.query),
        };
        profile.validate()?;

        Ok(GenConfig {
            profile,
            seed: args.seed,
            cases: args.cases.unwrap_or(1),
            out_dir: args.out_dir,
        })
    }
}
