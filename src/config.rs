use anyhow::Result;
use regex::Regex;

use crate::cli::Cli;
use crate::error::ScanError;

/// Substring that flags a dependency manifest by default.
pub const DEFAULT_MARKER: &str = "ljharb";

/// Default depth cap for the nested `package.json` search.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Directory entries skipped by the nested search: dot-entries plus common
/// install and build output folders. Folder names must match exactly, so
/// `builder/` or `distribution/` are still scanned.
const IGNORED_NAMES: &str = r"^(\.|(node_modules|dist|build|output|cache)$)";

/// Settings shared by the locator and the crawler for one run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Checked against the raw text of every non-root manifest.
    pub marker: String,
    pub manifest_name: String,
    /// Folder holding installed dependencies next to a manifest.
    pub modules_dir: String,
    pub max_depth: usize,
    pub ignore: Regex,
}

impl ScanConfig {
    /// Built-in defaults: `package.json` manifests under `node_modules`,
    /// marker [`DEFAULT_MARKER`], depth cap [`DEFAULT_MAX_DEPTH`].
    pub fn new() -> Result<Self> {
        Ok(ScanConfig {
            marker: DEFAULT_MARKER.to_string(),
            manifest_name: "package.json".to_string(),
            modules_dir: "node_modules".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            ignore: Regex::new(IGNORED_NAMES)?,
        })
    }

    /// Build the run configuration from command-line overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = ScanConfig::new()?;

        if let Some(marker) = &cli.marker {
            if marker.is_empty() {
                return Err(ScanError::Config("--marker must not be empty".to_string()).into());
            }
            config.marker = marker.clone();
        }

        if let Some(depth) = cli.max_depth {
            config.max_depth = depth;
        }

        Ok(config)
    }

    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.ignore.is_match(file_name)
    }
}
