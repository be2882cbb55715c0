//! Generation Profile
//!
//! Parameters for random case construction, loadable from TOML.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the query point of a case is placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Far beyond every rectangle, so the answer is always -1
    #[default]
    Outside,
    /// Anywhere in the area the rectangles can reach
    Random,
}

/// Random case parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenProfile {
    /// Body records per case
    pub count: usize,
    /// Corners are drawn from `[0, coord_max)`
    pub coord_max: i32,
    /// Smallest extent along either axis
    pub min_len: i32,
    /// Largest extent along either axis
    pub max_len: i32,
    pub query: QueryMode,
}

impl Default for GenProfile {
    fn default() -> Self {
        Self {
            count: 5,
            coord_max: 100,
            min_len: 1,
            max_len: 10,
            query: QueryMode::Outside,
        }
    }
}

impl GenProfile {
    /// Parse a profile from TOML text; missing keys take their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let profile: GenProfile =
            toml::from_str(content).context("Failed to parse generation profile TOML")?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and check a profile file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid profile: {}", path.display()))
    }

    /// Default profile location in the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("carpet-format").join("profile.toml"))
    }

    /// Reject parameters that cannot produce a valid case
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            bail!("count must be at least 1");
        }
        if i32::try_from(self.count).is_err() {
            bail!("count {} does not fit the header", self.count);
        }
        if self.coord_max <= 0 {
            bail!("coord_max must be positive, got {}", self.coord_max);
        }
        if self.min_len <= 0 {
            bail!("min_len must be positive, got {}", self.min_len);
        }
        if self.min_len > self.max_len {
            bail!(
                "min_len {} is greater than max_len {}",
                self.min_len,
                self.max_len
            );
        }
        // The outside query point needs a coordinate past every edge
        if (self.coord_max - 1)
            .checked_add(self.max_len)
            .and_then(|reach| reach.checked_add(1))
            .is_none()
        {
            bail!(
                "coord_max {} and max_len {} leave no room for an outside query point",
                self.coord_max,
                self.max_len
            );
        }
        Ok(())
    }

    /// Coordinate placed beyond every rectangle in [`QueryMode::Outside`]
    pub fn outside_coordinate(&self) -> i32 {
        self.coord_max.saturating_mul(10).max(self.reach().saturating_add(1))
    }

    /// Largest coordinate a rectangle edge can reach
    pub fn reach(&self) -> i32 {
        (self.coord_max - 1).saturating_add(self.max_len)
    }
}
