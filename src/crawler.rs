use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::locator::find_installed;
use crate::models::{Finding, Manifest};
use crate::session::ScanSession;

/// Depth-first walk over installed dependencies, flagging every manifest
/// whose raw text contains the configured marker.
pub struct Crawler<'a> {
    config: &'a ScanConfig,
}

impl<'a> Crawler<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Start an independent crawl at a root manifest.
    pub fn crawl_root(&self, manifest_path: &Path, session: &mut ScanSession) -> Result<bool> {
        self.crawl(manifest_path, &[], true, session)
    }

    /// Visit `manifest_path` and its dependency subtree.
    ///
    /// `ancestors` holds the package names between the crawl root (excluded)
    /// and this manifest; a dependency already on it is never descended into.
    /// The root additionally walks its `devDependencies` and is never reported
    /// itself. Returns whether anything in the subtree matched.
    pub fn crawl(
        &self,
        manifest_path: &Path,
        ancestors: &[String],
        is_root: bool,
        session: &mut ScanSession,
    ) -> Result<bool> {
        let content = std::fs::read_to_string(manifest_path).map_err(|source| ScanError::Read {
            path: manifest_path.to_path_buf(),
            source,
        })?;
        let manifest = Manifest::from_json(&content).map_err(|source| ScanError::Parse {
            path: manifest_path.to_path_buf(),
            source,
        })?;
        let name = manifest.display_name();

        debug!(path = %manifest_path.display(), name, depth = ancestors.len(), "crawling");

        let mut found = false;
        let mut dep_names = manifest.dependencies.clone();

        if is_root {
            dep_names.extend(manifest.dev_dependencies.iter().cloned());
        } else if content.contains(&self.config.marker) {
            session.record(Finding {
                name: name.to_string(),
                ancestors: ancestors.to_vec(),
            });
            found = true;
        }

        // Children of the root start with an empty chain
        let child_ancestors: Vec<String> = if is_root {
            Vec::new()
        } else {
            let mut chain = ancestors.to_vec();
            chain.push(name.to_string());
            chain
        };

        let base_dir = manifest_path.parent().unwrap_or(manifest_path);

        for dep_name in &dep_names {
            if ancestors.contains(dep_name) {
                debug!(dep = %dep_name, "skipping dependency cycle");
                continue;
            }

            let Some(dep_manifest) = find_installed(self.config, dep_name, base_dir) else {
                debug!(dep = %dep_name, from = %base_dir.display(), "dependency not installed");
                continue;
            };

            if self.crawl(&dep_manifest, &child_ancestors, false, session)? {
                found = true;
            }
        }

        Ok(found)
    }
}
