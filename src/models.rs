use std::path::PathBuf;

use serde::de::Error as _;
use serde::Serialize;
use serde_json::Value;

/// Name reported for a manifest without a `name` field.
pub const UNNAMED: &str = "undefined";

/// The parts of a `package.json` the crawler looks at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub name: Option<String>,
    /// Dependency names in manifest order.
    pub dependencies: Vec<String>,
    /// Dev dependency names in manifest order. Only consulted for a crawl root.
    pub dev_dependencies: Vec<String>,
}

impl Manifest {
    /// Parse raw `package.json` text.
    ///
    /// Missing, `null` or non-object dependency sections are treated as empty.
    /// Invalid JSON, or a document whose top level is not an object, is an error.
    /// A `name` that is not a string is kept as its JSON text (`123`, `null`).
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let json: Value = serde_json::from_str(content)?;
        if !json.is_object() {
            return Err(serde_json::Error::custom("manifest is not a JSON object"));
        }

        let name = json.get("name").map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });

        Ok(Manifest {
            name,
            dependencies: section_keys(&json, "dependencies"),
            dev_dependencies: section_keys(&json, "devDependencies"),
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

fn section_keys(json: &Value, section: &str) -> Vec<String> {
    json.get(section)
        .and_then(|v| v.as_object())
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Closest `package.json` upward from the working directory.
    Single,
    /// Every nested `package.json` below the working directory.
    Recursive,
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanMode::Single => write!(f, "closest"),
            ScanMode::Recursive => write!(f, "nested"),
        }
    }
}

/// A dependency whose manifest contains the marker, with the chain of
/// package names that led to it (the crawl root excluded).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub name: String,
    pub ancestors: Vec<String>,
}

/// Outcome of one crawl started from a root manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub manifest: PathBuf,
    pub findings: Vec<Finding>,
}

/// One numbered row of the final summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub index: usize,
    pub name: String,
    pub count: usize,
}
