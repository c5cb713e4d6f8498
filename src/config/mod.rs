//! Optional JSON configuration for the demo runner. A missing file means
//! defaults; a malformed one is a real error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

const DEFAULT_DATA_FILE: &str = "data.csv";
const DEFAULT_MIN_AMOUNT: f64 = 1500.0;
const DEFAULT_BONUS_THRESHOLD: f64 = 1800.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// CSV file the runner loads from and saves back to.
    pub data_file: PathBuf,
    /// Threshold for the amount-filter listing (strict `>`).
    pub min_amount: f64,
    /// Threshold above which certificates earn a bonus (strict `>`).
    pub bonus_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            min_amount: DEFAULT_MIN_AMOUNT,
            bonus_threshold: DEFAULT_BONUS_THRESHOLD,
        }
    }
}

impl Config {
    /// Reads `path` if present, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
