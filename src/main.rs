//! `depmark` — crawl installed package dependencies and report the ones whose
//! `package.json` mentions a marker.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and set up logging.
//! 2. Build the scan configuration ([`config::ScanConfig`]).
//! 3. Locate the starting manifest(s) ([`locator`]): the closest one upward, or
//!    every nested one with `-r`.
//! 4. Crawl each independently ([`crawler`]), tallying matches in one
//!    [`session::ScanSession`].
//! 5. Render the requested report ([`report`]).
//! 6. Exit `1` when no manifest can be located; a malformed manifest aborts the run.

mod cli;
mod config;
mod crawler;
mod error;
mod locator;
mod models;
mod report;
mod session;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, ReportFormat};
use config::ScanConfig;
use crawler::Crawler;
use error::ScanError;
use locator::{find_closest_upward, find_nested};
use models::{ScanMode, ScanResult};
use session::ScanSession;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve working directory
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = ScanConfig::from_cli(&cli)?;
    let mode = if cli.recursive {
        ScanMode::Recursive
    } else {
        ScanMode::Single
    };

    debug!(path = %path.display(), ?mode, marker = %config.marker, "starting scan");

    let manifests = match locate_manifests(&config, mode, &path) {
        Ok(manifests) => manifests,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let terminal = cli.report == ReportFormat::Terminal && !cli.quiet;
    let crawler = Crawler::new(&config);
    let mut session = ScanSession::new();
    let mut scans = Vec::new();

    for manifest in manifests {
        if terminal && mode == ScanMode::Recursive {
            report::terminal::print_header(&manifest);
        }

        let found = crawler.crawl_root(&manifest, &mut session)?;
        let findings = session.take_findings();
        debug!(manifest = %manifest.display(), found, matches = findings.len(), "crawl finished");

        if terminal {
            report::terminal::print_findings(&findings);
        }

        scans.push(ScanResult { manifest, findings });
    }

    let summary = session.summary();

    match cli.report {
        ReportFormat::Terminal => {
            if !session.is_empty() {
                report::terminal::print_summary(&summary);
            }
        }
        ReportFormat::Json => report::json::render(mode, &path, &scans, &summary)?,
    }

    Ok(())
}

/// Starting manifests for the selected mode; never empty on success.
fn locate_manifests(
    config: &ScanConfig,
    mode: ScanMode,
    dir: &Path,
) -> Result<Vec<PathBuf>, ScanError> {
    let manifests: Vec<PathBuf> = match mode {
        ScanMode::Single => find_closest_upward(config, dir).into_iter().collect(),
        ScanMode::Recursive => find_nested(config, dir),
    };

    if manifests.is_empty() {
        return Err(ScanError::NoManifest {
            mode,
            dir: dir.to_path_buf(),
        });
    }

    Ok(manifests)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("depmark={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
