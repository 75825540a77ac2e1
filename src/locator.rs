//! Manifest discovery.
//!
//! Three searches, all tolerant of filesystem errors (an unreadable entry is
//! treated as absent and the walk continues):
//! - [`find_closest_upward`]: nearest `package.json` in a directory or any ancestor.
//! - [`find_installed`]: module-resolution style lookup of
//!   `node_modules/<name>/package.json`, walking up from a base directory.
//! - [`find_nested`]: every `package.json` below a directory, depth-capped.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::trace;

use crate::config::ScanConfig;

/// Walk from `start` up to the filesystem root and return the first manifest found.
pub fn find_closest_upward(config: &ScanConfig, start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);

    while let Some(current) = dir {
        let candidate = current.join(&config.manifest_name);
        trace!(path = %candidate.display(), "checking for closest manifest");
        if exists(&candidate) {
            return Some(candidate);
        }
        dir = current.parent();
    }

    None
}

/// Resolve where `dep_name` is installed relative to `base_dir`.
///
/// Returns the canonical (symlink-resolved) path of the dependency's manifest.
/// There is no depth cap; the walk ends at the filesystem root.
pub fn find_installed(config: &ScanConfig, dep_name: &str, base_dir: &Path) -> Option<PathBuf> {
    // Only plain (optionally scoped) names stay inside the modules folder
    if !Path::new(dep_name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        trace!(dep = dep_name, "dependency name is not a package path");
        return None;
    }

    let mut dir = Some(base_dir);

    while let Some(current) = dir {
        let candidate = current
            .join(&config.modules_dir)
            .join(dep_name)
            .join(&config.manifest_name);
        trace!(path = %candidate.display(), "checking for installed manifest");
        if exists(&candidate) {
            if let Ok(resolved) = candidate.canonicalize() {
                return Some(resolved);
            }
        }
        dir = current.parent();
    }

    None
}

/// Collect every manifest below `dir` in depth-first pre-order.
///
/// Entries matching the ignore pattern are skipped. Directories are entered
/// while the current depth (0 at `dir`) is below `config.max_depth`. Entries
/// are visited in directory-listing order.
pub fn find_nested(config: &ScanConfig, dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    collect_nested(config, dir, 0, &mut found);
    found
}

fn collect_nested(config: &ScanConfig, dir: &Path, depth: usize, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            trace!(dir = %dir.display(), %err, "skipping unreadable directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if config.is_ignored(name) {
            continue;
        }

        let path = entry.path();
        // Follow symlinks, like a plain stat
        let Ok(meta) = fs::metadata(&path) else {
            continue;
        };

        if meta.is_file() && name == config.manifest_name {
            found.push(path);
        } else if meta.is_dir() && depth < config.max_depth {
            collect_nested(config, &path, depth + 1, found);
        }
    }
}

fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}
