//! Batch Output
//!
//! Writes numbered `test_data_{i}.in` / `test_data_{i}.out` pairs and
//! describes them in a manifest.

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::answer::solve;
use super::cases::generate_case;
use super::profile::GenProfile;
use crate::validation::validate_document;

/// Manifest entry for one written case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseRecord {
    pub index: usize,
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub answer: i64,
}

/// Generate `cases` cases into `dir`, creating it if needed.
///
/// Each rendered case is validated again before it is written; a case that
/// fails is logged and skipped, and numbering continues without a gap.
pub fn write_batch<R: Rng + ?Sized>(
    dir: &Path,
    cases: usize,
    profile: &GenProfile,
    rng: &mut R,
) -> Result<Vec<CaseRecord>> {
    profile.validate()?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut manifest = Vec::new();
    for attempt in 1..=cases {
        let text = generate_case(profile, rng).to_string();

        let doc = match validate_document(&text) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Generated case {} is invalid, skipping: {}", attempt, e);
                continue;
            }
        };

        let index = manifest.len() + 1;
        let input = dir.join(format!("test_data_{index}.in"));
        let output = dir.join(format!("test_data_{index}.out"));
        let answer = solve(&doc);

        fs::write(&input, &text)
            .with_context(|| format!("Failed to write {}", input.display()))?;
        fs::write(&output, format!("{answer}\n"))
            .with_context(|| format!("Failed to write {}", output.display()))?;

        log::info!(
            "Added test case {}: {} records, answer {}",
            index,
            doc.count(),
            answer
        );
        manifest.push(CaseRecord {
            index,
            input,
            output,
            records: doc.count(),
            answer,
        });
    }

    log::info!("Generated {} valid test cases", manifest.len());
    Ok(manifest)
}
