use std::path::PathBuf;

use thiserror::Error;

use crate::models::ScanMode;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No {} package.json found from {}", mode, dir.display())]
    NoManifest { mode: ScanMode, dir: PathBuf },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_manifest_messages() {
        let single = ScanError::NoManifest {
            mode: ScanMode::Single,
            dir: PathBuf::from("/work"),
        };
        assert_eq!(single.to_string(), "No closest package.json found from /work");

        let nested = ScanError::NoManifest {
            mode: ScanMode::Recursive,
            dir: PathBuf::from("/work"),
        };
        assert_eq!(nested.to_string(), "No nested package.json found from /work");
    }
}
