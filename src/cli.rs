use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "depmark",
    about = "Crawl installed dependencies and report packages whose manifest carries a marker",
    version
)]
pub struct Cli {
    /// Working directory to scan from
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Scan every nested package.json below PATH instead of the closest one above it
    #[arg(short, long)]
    pub recursive: bool,

    /// Substring searched for in each dependency's raw package.json
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Maximum directory depth for the nested package.json search
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Only print the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Print debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_single_mode() {
        let cli = Cli::parse_from(["depmark"]);
        assert!(!cli.recursive);
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.report, ReportFormat::Terminal);
        assert!(cli.marker.is_none());
    }

    #[test]
    fn test_short_recursive_flag() {
        let cli = Cli::parse_from(["depmark", "-r", "some/dir"]);
        assert!(cli.recursive);
        assert_eq!(cli.path, PathBuf::from("some/dir"));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "depmark",
            "--marker",
            "acme",
            "--max-depth",
            "3",
            "--report",
            "json",
        ]);
        assert_eq!(cli.marker.as_deref(), Some("acme"));
        assert_eq!(cli.max_depth, Some(3));
        assert_eq!(cli.report, ReportFormat::Json);
    }
}
